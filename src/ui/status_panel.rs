use egui::Color32;

use crate::model::player::{PlayerProfile, StatCategory};
use crate::ui::app::SystemApp;
use crate::ui::settings::UiSettings;

pub fn draw(ctx: &egui::Context, app: &mut SystemApp) {
    egui::SidePanel::left("status")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("STATUS");
            ui.separator();

            draw_profile(ui, &app.ui.snapshot.player);

            ui.separator();
            draw_settings(ui, &mut app.ui.settings, &mut app.ui.settings_dirty);
        });
}

fn draw_profile(ui: &mut egui::Ui, player: &PlayerProfile) {
    ui.label(
        egui::RichText::new(format!("LEVEL {}", player.level))
            .size(28.0)
            .strong(),
    );
    ui.label(format!("Title: {}", player.title));
    ui.label(format!("Job: {}", player.job));
    ui.add_space(8.0);

    bar(ui, "XP", player.current_xp, player.required_xp, Color32::from_rgb(40, 70, 120));
    bar(ui, "HP", player.hp, player.max_hp, Color32::from_rgb(150, 40, 40));
    bar(ui, "MP", player.mp, player.max_mp, Color32::from_rgb(60, 60, 160));

    ui.add_space(8.0);
    ui.label(egui::RichText::new(format!("Gold: {}", player.gold)).strong());

    ui.separator();
    ui.label(egui::RichText::new("ACTIVITY REPORT").small().weak());
    for category in StatCategory::ALL {
        ui.horizontal(|ui| {
            ui.label(category.label());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(player.counter(category).to_string());
            });
        });
    }
}

fn bar(ui: &mut egui::Ui, label: &str, value: u32, max: u32, color: Color32) {
    let fraction = if max == 0 {
        0.0
    } else {
        (value as f32 / max as f32).min(1.0)
    };
    ui.add(
        egui::ProgressBar::new(fraction)
            .fill(color)
            .text(format!("{label} {value}/{max}")),
    );
}

fn draw_settings(ui: &mut egui::Ui, settings: &mut UiSettings, dirty: &mut bool) {
    ui.collapsing("Settings", |ui| {
        ui.label("UI Scale");
        if ui
            .add(egui::Slider::new(&mut settings.ui_scale, 0.75..=2.0))
            .changed()
        {
            *dirty = true;
        }
    });
}
