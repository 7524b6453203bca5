//! Session configuration.

use std::path::PathBuf;

use crate::request::FinalityFilter;

/// Default public Substreams endpoint.
pub const DEFAULT_ENDPOINT: &str = "api.streamingfast.io:443";

/// Default environment variable holding the bearer token.
pub const DEFAULT_TOKEN_ENV: &str = "SUBSTREAMS_API_TOKEN";

/// Everything one streaming session needs, in one explicit structure.
///
/// Callers construct this (the CLI from flags, embedders in code) and pass
/// it down; nothing in the session reads process-wide constants. Two
/// sessions with different configs can run side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Remote endpoint, `host:port` or a full `http(s)://` URI.
    pub endpoint: String,
    /// Name of the environment variable holding the bearer token.
    pub token_env: String,
    /// Path to the compiled module package (`.spkg`).
    pub package: PathBuf,
    /// Modules whose outputs the server should stream back, in order.
    pub output_modules: Vec<String>,
    /// First block of the requested range. Negative means relative to the
    /// chain head, per the service contract.
    pub start_block: i64,
    /// Last block of the requested range.
    pub stop_block: u64,
    /// Which fork steps to subscribe to.
    pub finality: FinalityFilter,
    /// Connect without TLS (h2c), for local or sidecar endpoints.
    pub plaintext: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            package: PathBuf::new(),
            output_modules: Vec::new(),
            start_block: 0,
            stop_block: 0,
            finality: FinalityFilter::default(),
            plaintext: false,
        }
    }
}
