pub mod types;
pub mod pdf;
pub mod text_parse;
pub mod name_guess;
pub mod vision;
pub mod orchestrator;

pub use types::*;
pub use pdf::*;
pub use text_parse::*;
pub use name_guess::*;
pub use vision::*;
pub use orchestrator::*;

use thiserror::Error;

use crate::model::ModelError;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read the uploaded file: {0}")]
    DocumentUnreadable(String),

    #[error("The document does not look like a CliftonStrengths report")]
    WrongDocumentType,

    #[error("No CliftonStrengths themes could be extracted from the document")]
    NoStrengthsFound,

    #[error("No themes found in the vision extraction reply")]
    NoThemesReturned,

    #[error("Vision extraction returned no valid CliftonStrengths theme names")]
    NoValidThemes,

    #[error(
        "Vision extraction found {invalid} unrecognised theme names and only {valid} valid ones"
    )]
    LowConfidenceExtraction { invalid: usize, valid: usize },

    #[error("Failed to parse the vision extraction reply as JSON: {0}")]
    InvalidResponseFormat(String),

    #[error("Vision extraction returned an empty reply")]
    EmptyReply,

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Both extraction strategies failed")]
    ExtractionFailed(#[source] Box<ExtractionError>),
}
