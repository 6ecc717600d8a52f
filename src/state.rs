use std::path::Path;

use serde_json::Value;

use crate::data::filter::filtered_response;
use crate::data::input::{load_input_file, parse_input, save_json_file};
use crate::data::model::{FilterOption, FilterSelection};
use crate::net::client::{BfhlClient, PendingSubmit, SubmitError};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Raw text box contents.
    pub input: String,

    /// Last successful response (None until the first one arrives).
    pub response: Option<Value>,

    /// Error shown in red under the form.
    pub error: Option<String>,

    /// Ticked filter options.
    pub filters: FilterSelection,

    /// Request currently in flight, if any.
    pub pending: Option<PendingSubmit>,

    /// Informational message for the top bar (file loaded, saved, ...).
    pub status_message: Option<String>,
}

impl AppState {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the input and start the request.
    ///
    /// Ignored while a request is already in flight. A validation failure
    /// sets `error` and leaves any earlier response on screen.
    pub fn submit(&mut self, client: &BfhlClient) {
        if self.is_pending() {
            log::debug!("Submit ignored: a request is already in flight");
            return;
        }

        let payload = match parse_input(&self.input) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Rejected input: {e}");
                self.error = Some(e.to_string());
                return;
            }
        };

        self.error = None;
        self.pending = Some(client.spawn(payload));
    }

    /// Collect the in-flight result if it has arrived. Returns `true` when
    /// the request finished this call.
    pub fn poll_pending(&mut self) -> bool {
        let Some(result) = self.pending.as_ref().and_then(PendingSubmit::poll) else {
            return false;
        };
        self.pending = None;
        self.finish(result);
        true
    }

    fn finish(&mut self, result: Result<Value, SubmitError>) {
        match result {
            Ok(value) => {
                log::info!("Received response");
                self.status_message = None;
                self.response = Some(value);
            }
            Err(e) => {
                self.status_message = e
                    .status()
                    .map(|status| format!("Last request failed with HTTP {status}"));
                self.error = Some(e.to_string());
            }
        }
    }

    /// Filtered view of the current response.
    pub fn filtered(&self) -> Option<Value> {
        self.response
            .as_ref()
            .map(|r| filtered_response(r, &self.filters))
    }

    pub fn toggle_filter(&mut self, option: FilterOption) {
        self.filters.toggle(option);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Replace the text box contents with a file's text.
    pub fn load_file(&mut self, path: &Path) {
        match load_input_file(path) {
            Ok(text) => {
                log::info!("Loaded input from {}", path.display());
                self.input = text;
                self.status_message = Some(format!("Loaded {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.error = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Write the current response to `path`. No-op without a response.
    pub fn save_response(&mut self, path: &Path) {
        let Some(response) = &self.response else {
            return;
        };
        match save_json_file(path, response) {
            Ok(()) => {
                log::info!("Saved response to {}", path.display());
                self.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to save response: {e:#}");
                self.error = Some(format!("Error: {e:#}"));
            }
        }
    }
}
