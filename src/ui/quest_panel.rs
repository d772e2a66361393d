use egui::Color32;
use uuid::Uuid;

use crate::engine::protocol::EngineCommand;
use crate::model::player::StatCategory;
use crate::model::quest::{self, Quest, QuestDifficulty, Subtask};
use crate::ui::app::{QuestEditState, SystemApp};

pub fn draw(ctx: &egui::Context, app: &mut SystemApp) {
    let all_done = quest::all_completed(&app.ui.snapshot.quests);

    egui::TopBottomPanel::bottom("wish_bar").show_animated(ctx, all_done, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            if ui
                .button(egui::RichText::new("MAKE A WISH").size(20.0).strong())
                .clicked()
            {
                app.ui.wish_open = true;
            }
            ui.small("SYSTEM REWARD AVAILABLE");
            ui.add_space(6.0);
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(if all_done { "TASKS COMPLETE" } else { "DAILY TASKS" });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if app.ui.is_generating {
                    ui.add(egui::Spinner::new());
                    ui.label("Generating…");
                } else {
                    if ui.button("Refresh").clicked() {
                        app.send_command(EngineCommand::RefreshQuests);
                    }
                    if ui.button("Add").clicked() {
                        app.send_command(EngineCommand::AddQuest);
                    }
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if app.ui.snapshot.quests.is_empty() && !app.ui.is_generating {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label("NO ACTIVE TASKS.");
                        ui.small("Awaiting generation.");
                    });
                }

                // Commands mutate through the engine, so draw from a copy.
                let quests = app.ui.snapshot.quests.clone();
                for quest in &quests {
                    draw_quest(ui, app, quest);
                    ui.add_space(6.0);
                }
            });
    });
}

fn draw_quest(ui: &mut egui::Ui, app: &mut SystemApp, quest: &Quest) {
    let editing = app.ui.editing.as_ref().map(|e| e.draft.id) == Some(quest.id);
    ui.group(|ui| {
        if editing {
            draw_edit_form(ui, app, quest.id);
        } else {
            draw_quest_card(ui, app, quest);
        }
    });
}

fn draw_quest_card(ui: &mut egui::Ui, app: &mut SystemApp, quest: &Quest) {
    ui.horizontal(|ui| {
        let mut done = quest.is_completed;
        let response = ui
            .add_enabled(
                !quest.is_completed && quest.completable(),
                egui::Checkbox::without_text(&mut done),
            )
            .on_disabled_hover_text(if quest.is_completed {
                "Already complete"
            } else {
                "Complete all subtasks first"
            });
        if response.changed() && done {
            app.send_command(EngineCommand::CompleteQuest(quest.id));
        }

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                let title = if quest.is_completed {
                    egui::RichText::new(&quest.title).strikethrough().weak()
                } else {
                    egui::RichText::new(&quest.title).strong()
                };
                ui.label(title);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Rank {}", quest.difficulty.letter()))
                            .color(difficulty_color(quest.difficulty))
                            .strong(),
                    );
                    if !quest.is_completed && ui.small_button("Edit").clicked() {
                        app.ui.editing = Some(QuestEditState { draft: quest.clone() });
                    }
                });
            });

            ui.label(egui::RichText::new(&quest.description).weak());

            for subtask in &quest.subtasks {
                let mut checked = subtask.is_completed;
                let response = ui.add_enabled(
                    !quest.is_completed,
                    egui::Checkbox::new(&mut checked, &subtask.text),
                );
                if response.changed() {
                    app.send_command(EngineCommand::ToggleSubtask {
                        quest_id: quest.id,
                        subtask_id: subtask.id,
                    });
                }
            }

            ui.horizontal(|ui| {
                ui.small(format!("XP +{}", quest.reward_xp));
                ui.small(format!("Gold +{}", quest.reward_gold));
                ui.small(quest.stat_category.label());
            });
        });
    });
}

fn draw_edit_form(ui: &mut egui::Ui, app: &mut SystemApp, quest_id: Uuid) {
    enum EditAction {
        None,
        Save,
        Cancel,
        Delete,
    }
    let mut action = EditAction::None;

    let Some(edit) = app.ui.editing.as_mut() else {
        return;
    };
    let draft = &mut edit.draft;

    ui.label("Title");
    ui.text_edit_singleline(&mut draft.title);
    ui.label("Description");
    ui.add(egui::TextEdit::multiline(&mut draft.description).desired_rows(2));

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt((quest_id, "difficulty"))
            .selected_text(format!("Rank {}", draft.difficulty.letter()))
            .show_ui(ui, |ui| {
                for d in QuestDifficulty::ALL {
                    ui.selectable_value(&mut draft.difficulty, d, format!("Rank {}", d.letter()));
                }
            });
        egui::ComboBox::from_id_salt((quest_id, "category"))
            .selected_text(draft.stat_category.label())
            .show_ui(ui, |ui| {
                for c in StatCategory::ALL {
                    ui.selectable_value(&mut draft.stat_category, c, c.label());
                }
            });
    });

    ui.horizontal(|ui| {
        ui.label("XP");
        ui.add(egui::DragValue::new(&mut draft.reward_xp).range(0..=1000));
        ui.label("Gold");
        ui.add(egui::DragValue::new(&mut draft.reward_gold).range(0..=1000));
    });

    ui.label("Subtasks");
    let mut remove: Option<usize> = None;
    for (i, subtask) in draft.subtasks.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut subtask.text);
            if ui.small_button("❌").clicked() {
                remove = Some(i);
            }
        });
    }
    if let Some(i) = remove {
        draft.subtasks.remove(i);
    }
    if ui.small_button("Add Subtask").clicked() {
        draft.subtasks.push(Subtask::new(""));
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Delete").clicked() {
            action = EditAction::Delete;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Save").clicked() {
                action = EditAction::Save;
            }
            if ui.button("Cancel").clicked() {
                action = EditAction::Cancel;
            }
        });
    });

    match action {
        EditAction::Save => {
            if let Some(edit) = app.ui.editing.take() {
                app.send_command(EngineCommand::EditQuest(Box::new(edit.draft)));
            }
        }
        EditAction::Cancel => app.ui.editing = None,
        EditAction::Delete => {
            app.ui.editing = None;
            app.send_command(EngineCommand::DeleteQuest(quest_id));
        }
        EditAction::None => {}
    }
}

fn difficulty_color(difficulty: QuestDifficulty) -> Color32 {
    match difficulty {
        QuestDifficulty::E => Color32::GRAY,
        QuestDifficulty::D => Color32::from_rgb(80, 160, 80),
        QuestDifficulty::C => Color32::from_rgb(70, 130, 200),
        QuestDifficulty::B => Color32::from_rgb(150, 90, 200),
        QuestDifficulty::A => Color32::from_rgb(210, 90, 70),
        QuestDifficulty::S => Color32::GOLD,
    }
}
