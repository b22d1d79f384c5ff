use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::app_state::OpenWorkLogApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Open Work Log egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Open Work Log")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Open Work Log",
        options,
        Box::new(|cc| match OpenWorkLogApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Open Work Log app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
