pub mod types;
pub mod prompt;
pub mod parser;
pub mod orchestrator;

pub use types::*;
pub use prompt::*;
pub use parser::*;
pub use orchestrator::*;

use thiserror::Error;

use crate::model::ModelError;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No strengths provided for analysis")]
    NoStrengths,

    #[error("Invalid track id: {0}")]
    UnknownTrack(String),

    #[error("Prompt is too large ({size} chars, limit {limit})")]
    PromptTooLarge { size: usize, limit: usize },

    #[error("Empty response from the model")]
    EmptyResponse,

    #[error("Failed to parse the analysis response: {0}")]
    MalformedResponse(String),

    #[error("The analysis response was missing required sections")]
    IncompleteResponse,

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Coarse failure classes a caller can map to status codes or user-facing
/// copy without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Missing key or other deployment problem.
    Configuration,
    /// The caller's input was rejected before any model call.
    InvalidInput,
    /// Upstream quota or 429.
    RateLimited,
    /// The model answered but the reply was unusable.
    BadResponse,
    /// Transport or upstream service failure.
    Upstream,
}

impl AnalysisError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AnalysisError::NoStrengths
            | AnalysisError::UnknownTrack(_)
            | AnalysisError::PromptTooLarge { .. } => FailureKind::InvalidInput,
            AnalysisError::EmptyResponse
            | AnalysisError::MalformedResponse(_)
            | AnalysisError::IncompleteResponse => FailureKind::BadResponse,
            AnalysisError::Model(ModelError::MissingApiKey) => FailureKind::Configuration,
            AnalysisError::Model(e) if e.is_rate_limited() => FailureKind::RateLimited,
            AnalysisError::Model(_) => FailureKind::Upstream,
        }
    }
}
