use crate::engine::protocol::EngineCommand;
use crate::ui::app::SystemApp;

pub fn draw(ctx: &egui::Context, app: &mut SystemApp) {
    if !app.ui.wish_open {
        return;
    }

    egui::Window::new("MAKE A WISH")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("All daily tasks are complete. The System will grant one request.");
            ui.add_space(6.0);

            ui.add_enabled(
                !app.ui.is_wishing,
                egui::TextEdit::multiline(&mut app.ui.wish_input)
                    .hint_text("State your wish…")
                    .desired_rows(3)
                    .desired_width(280.0),
            );

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if app.ui.is_wishing {
                    ui.add(egui::Spinner::new());
                    ui.label("Processing wish…");
                } else {
                    if ui.button("Grant").clicked() {
                        let text = app.ui.wish_input.trim().to_string();
                        if !text.is_empty() {
                            app.ui.is_wishing = true;
                            app.send_command(EngineCommand::MakeWish(text));
                            app.ui.wish_input.clear();
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        app.ui.wish_open = false;
                    }
                }
            });
        });
}
