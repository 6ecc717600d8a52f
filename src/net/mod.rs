/// Outbound HTTP: the single POST to the configured endpoint.
pub mod client;
