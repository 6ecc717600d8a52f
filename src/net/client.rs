use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use crate::data::model::Payload;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Submission failures. `Display` is the generic text shown in the UI;
/// the details are only logged.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Failed to build HTTP client")]
    Setup(#[source] reqwest::Error),

    #[error("Failed to fetch")]
    Transport(#[source] reqwest::Error),

    #[error("Server Error")]
    Server(StatusCode),

    #[error("Server returned invalid JSON")]
    InvalidBody(#[source] serde_json::Error),

    #[error("Request worker stopped unexpectedly")]
    WorkerLost,
}

impl SubmitError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SubmitError::Server(status) => Some(*status),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Blocking client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct BfhlClient {
    http: Client,
    endpoint: Url,
}

impl BfhlClient {
    pub fn new(config: &AppConfig) -> Result<Self, SubmitError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(SubmitError::Setup)?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `payload` as JSON and decode the JSON reply.
    pub fn post(&self, payload: &Payload) -> Result<Value, SubmitError> {
        log::info!(
            "POST {} with {} data entries",
            self.endpoint,
            payload.data_len()
        );

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .map_err(|e| {
                log::error!("Fetch error: {e}");
                SubmitError::Transport(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            log::error!("Fetch error: {} answered {status}", self.endpoint);
            return Err(SubmitError::Server(status));
        }

        let body = resp.bytes().map_err(|e| {
            log::error!("Fetch error while reading body: {e}");
            SubmitError::Transport(e)
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            log::error!("Fetch error: response body is not JSON: {e}");
            SubmitError::InvalidBody(e)
        })
    }

    /// Run [`post`](Self::post) on a worker thread.
    pub fn spawn(&self, payload: Payload) -> PendingSubmit {
        let (tx, rx) = mpsc::channel();
        let client = self.clone();
        thread::spawn(move || {
            // The receiver is gone if the app closed mid-request.
            let _ = tx.send(client.post(&payload));
        });
        PendingSubmit { rx }
    }
}

// ---------------------------------------------------------------------------
// In-flight request handle
// ---------------------------------------------------------------------------

/// Result slot for a request running on a worker thread.
#[derive(Debug)]
pub struct PendingSubmit {
    rx: Receiver<Result<Value, SubmitError>>,
}

impl PendingSubmit {
    /// Non-blocking check. `None` while the request is still running.
    pub fn poll(&self) -> Option<Result<Value, SubmitError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(SubmitError::WorkerLost)),
        }
    }

    /// Block until the worker answers.
    #[cfg(test)]
    pub fn wait(self) -> Result<Value, SubmitError> {
        self.rx.recv().unwrap_or(Err(SubmitError::WorkerLost))
    }
}
