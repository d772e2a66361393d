use egui::Color32;

use crate::engine::protocol::EngineCommand;
use crate::model::message::{ChatMessage, Sender};
use crate::ui::app::SystemApp;

pub fn draw(ctx: &egui::Context, app: &mut SystemApp) {
    let input_id = egui::Id::new("chat_input_box");

    egui::SidePanel::right("chat")
        .resizable(true)
        .default_width(320.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("SYSTEM LINK");
            ui.separator();

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                // Input bar sits at the bottom; the transcript fills the rest.
                let mut send_now = false;

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let response = ui.add_enabled(
                        !app.ui.is_chatting,
                        egui::TextEdit::singleline(&mut app.ui.chat_input)
                            .id(input_id)
                            .hint_text("Message The System…")
                            .desired_width(ui.available_width() - 60.0)
                            .lock_focus(true),
                    );

                    if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        send_now = true;
                    }

                    if app.ui.is_chatting {
                        ui.add(egui::Spinner::new());
                    } else if ui.button("Send").clicked() {
                        send_now = true;
                    }
                });

                if send_now && !app.ui.is_chatting {
                    let text = app.ui.chat_input.trim().to_string();

                    if !text.is_empty() {
                        app.ui.is_chatting = true;
                        app.send_command(EngineCommand::SendChat(text));
                        app.ui.chat_input.clear();
                    }

                    ui.memory_mut(|m| m.request_focus(input_id));
                }

                ui.separator();

                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    egui::ScrollArea::vertical()
                        .stick_to_bottom(app.ui.should_auto_scroll)
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            for msg in &app.ui.snapshot.chat {
                                draw_message(ui, msg);
                            }
                        });
                });
            });
        });
}

fn draw_message(ui: &mut egui::Ui, msg: &ChatMessage) {
    let (color, right) = match msg.sender {
        Sender::User => (Color32::from_rgb(40, 70, 120), true),
        Sender::System => (Color32::from_rgb(55, 55, 65), false),
    };

    ui.add_space(6.0);

    if right {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            bubble(ui, color, &msg.text);
        });
    } else {
        bubble(ui, color, &msg.text);
    }
}

fn bubble(ui: &mut egui::Ui, color: Color32, text: &str) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(Color32::WHITE));
        });
}
