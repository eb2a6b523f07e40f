use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the SMHI client.
///
/// There is no recovery logic anywhere in this crate: every variant
/// propagates unchanged to the caller, who decides whether to retry.
#[derive(Debug, Error)]
pub enum SmhiError {
    /// Connection, DNS, timeout or body-read failure from the HTTP stack.
    #[error("failed to reach the SMHI API: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a status the fetch path does not accept.
    #[error("SMHI API returned unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    /// The response body was not valid JSON, or lacked the expected
    /// `timeSeries`/`parameters` structure.
    #[error("failed to decode SMHI response: {0}")]
    Malformed(#[from] serde_json::Error),
}
