use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/bfhl";

// ---------------------------------------------------------------------------
// Runtime configuration (flags, each backed by an env var)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Parser)]
#[command(name = "bfhl-form", version, about = "Submit JSON to a /bfhl endpoint and filter the response")]
pub struct AppConfig {
    /// Endpoint the payload is POSTed to.
    #[arg(long, env = "BFHL_ENDPOINT", default_value = DEFAULT_ENDPOINT, value_parser = parse_url)]
    pub endpoint: Url,

    /// Request timeout in seconds.
    #[arg(long, env = "BFHL_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// JSON file preloaded into the input box.
    #[arg(long, env = "BFHL_INPUT")]
    pub input: Option<PathBuf>,
}

impl AppConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout_secs: 30,
            input: None,
        }
    }
}

fn parse_url(input: &str) -> Result<Url, String> {
    let url = input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported URL scheme '{other}'")),
    }
}
