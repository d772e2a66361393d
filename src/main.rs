mod engine;
mod model;
mod ui;

use env_logger::Env;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "SYSTEM AWAKENING",
        options,
        Box::new(|_cc| Ok(Box::new(ui::app::SystemApp::new()))),
    )
}
