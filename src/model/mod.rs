pub mod gemini;

pub use gemini::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Gemini API key is not configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("Could not reach the Gemini API at {0}")]
    Connection(String),

    #[error("Gemini request timed out after {0}s")]
    Timeout(u64),

    #[error("Gemini rate limit hit: {0}")]
    RateLimited(String),

    #[error("Gemini returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}

impl ModelError {
    /// Whether this error is an upstream rate-limit / resource-exhaustion
    /// signal. Besides the explicit variant, match the known markers in
    /// upstream error text so transport-level failures classify too.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            ModelError::RateLimited(_) => true,
            ModelError::Api { status, body } => {
                *status == 429 || body.contains("RESOURCE_EXHAUSTED")
            }
            ModelError::HttpClient(msg) => {
                msg.contains("429") || msg.contains("RESOURCE_EXHAUSTED")
            }
            _ => false,
        }
    }
}
