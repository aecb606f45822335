//! Halma GUI
//!
//! A graphical interface for playing Halma against the AI or another
//! player at the same machine.

use halma::ui::HalmaApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([950.0, 700.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Halma"),
        ..Default::default()
    };

    eframe::run_native(
        "Halma",
        options,
        Box::new(|cc| Ok(Box::new(HalmaApp::new(cc)))),
    )
}
