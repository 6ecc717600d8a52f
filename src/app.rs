use std::time::Duration;

use eframe::egui;

use crate::net::client::BfhlClient;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BfhlApp {
    pub state: AppState,
    client: BfhlClient,
}

impl BfhlApp {
    pub fn new(client: BfhlClient, state: AppState) -> Self {
        Self { state, client }
    }
}

impl eframe::App for BfhlApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Collect a finished request before drawing ----
        self.state.poll_pending();
        if self.state.is_pending() {
            // Nothing else wakes the UI when the worker answers.
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.client);
        });

        // ---- Central panel: form ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::form_panel(ui, &mut self.state, &self.client);
        });
    }
}
