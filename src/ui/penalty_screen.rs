use egui::Color32;

/// Full-window takeover while a penalty is running. Nothing else is
/// reachable until the countdown hits zero.
pub fn draw(ctx: &egui::Context, expires_ms: i64, now_ms: i64) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(Color32::BLACK))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.label(
                    egui::RichText::new("PENALTY ZONE")
                        .size(48.0)
                        .strong()
                        .color(Color32::from_rgb(255, 42, 42)),
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("FAILURE TO COMPLETE DAILY TASKS")
                        .size(18.0)
                        .color(Color32::WHITE),
                );
                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new("SYSTEM CONNECTION SEVERED.\nALL ACTIONS RESTRICTED.")
                        .color(Color32::GRAY),
                );
                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new("LOCKOUT REMAINING")
                        .small()
                        .color(Color32::from_rgb(160, 40, 40)),
                );
                ui.label(
                    egui::RichText::new(format_countdown(expires_ms - now_ms))
                        .size(36.0)
                        .monospace()
                        .color(Color32::WHITE),
                );
            });
        });
}

/// HH:MM:SS until expiry, clamped at zero.
pub fn format_countdown(remaining_ms: i64) -> String {
    let total_secs = remaining_ms.max(0) / 1000;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
