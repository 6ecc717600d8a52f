/// Data layer: payload validation, response filtering, and file IO.
///
/// Architecture:
/// ```text
///   text box / .json file
///        │
///        ▼
///   ┌──────────┐
///   │  input    │  parse + validate → Payload
///   └──────────┘
///        │  POST /bfhl (net::client)
///        ▼
///   ┌──────────────┐
///   │ response Value│  rendered verbatim
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection → derived subset
///   └──────────┘
/// ```

pub mod filter;
pub mod input;
pub mod model;
