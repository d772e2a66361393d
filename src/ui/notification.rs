use egui::Color32;

use crate::model::notification::NotificationKind;
use crate::ui::app::SystemApp;

/// Overlay for the most recent engine notification. Stays up until
/// dismissed; a newer notification replaces it.
pub fn draw(ctx: &egui::Context, app: &mut SystemApp) {
    let Some(notification) = app.ui.notification.clone() else {
        return;
    };

    let accent = match notification.kind {
        NotificationKind::LevelUp => Color32::GOLD,
        NotificationKind::QuestComplete => Color32::from_rgb(0, 168, 204),
        NotificationKind::Info => Color32::LIGHT_GRAY,
    };

    egui::Window::new("system_notification")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 24.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(&notification.message)
                        .size(22.0)
                        .strong()
                        .color(accent),
                );
                if let Some(subtext) = &notification.subtext {
                    ui.label(subtext);
                }
                ui.add_space(4.0);
                if ui.button("Acknowledge").clicked() {
                    app.ui.notification = None;
                }
                ui.add_space(4.0);
            });
        });
}
