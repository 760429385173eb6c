use thiserror::Error;

/// Message shown to the user whenever a request settles with an error.
/// The underlying failure is logged for diagnostics, never displayed.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Errors produced while talking to the recommendation API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failure, timeout, or non-2xx status
    #[error("request failed: {0}")]
    Network(String),
    /// Malformed or unexpected-shape payload
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Fixed user-facing message; network and decode failures are not
    /// distinguished to the user.
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}
