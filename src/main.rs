mod app;
mod color;
mod config;
mod data;
mod net;
mod state;
mod ui;

use app::BfhlApp;
use clap::Parser;
use config::AppConfig;
use eframe::egui;
use net::client::{BfhlClient, SubmitError};
use state::AppState;

/// Surface a client setup failure through `main`'s error path.
fn setup_error(e: SubmitError) -> eframe::Error {
    log::error!("{e}: {e:?}");
    eframe::Error::AppCreation(Box::new(e))
}

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::parse();
    log::info!("Submitting to {}", config.endpoint);

    let client = BfhlClient::new(&config).map_err(setup_error)?;

    let mut state = AppState::default();
    if let Some(path) = &config.input {
        state.load_file(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 760.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BFHL – JSON Submit",
        options,
        Box::new(|_cc| Ok(Box::new(BfhlApp::new(client, state)))),
    )
}
