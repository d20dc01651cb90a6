use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// One ranked theme recovered from a report. Within one extraction result,
/// ranks are unique, contiguous from 1, and follow the source's stated order
/// (best strength = rank 1). Lives only for the duration of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedStrength {
    pub rank: u32,
    pub name: String,
    /// Free-text description from the report; empty when none was found.
    #[serde(default)]
    pub description: String,
}

/// Output of a single extraction strategy (text or vision).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthExtraction {
    pub strengths: Vec<ExtractedStrength>,
    /// Best-effort candidate name; empty when none was found.
    pub extracted_name: String,
}

/// Final output of the extraction orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    pub strengths: Vec<ExtractedStrength>,
    pub extracted_name: String,
    pub used_vision_fallback: bool,
}

/// PDF-to-text primitive abstraction (allows mocking for tests).
pub trait PdfTextSource: Send + Sync {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Sort strengths by their raw rank and close any gaps so ranks form the
/// contiguous sequence 1..N. Stable: equal raw ranks keep insertion order,
/// which lets the primary strategy's findings stay ahead of fallback entries.
pub fn rerank(strengths: &mut Vec<ExtractedStrength>) {
    strengths.sort_by_key(|s| s.rank);
    for (i, s) in strengths.iter_mut().enumerate() {
        s.rank = i as u32 + 1;
    }
}

#[cfg(test)]
pub struct StaticTextSource(pub String);

#[cfg(test)]
impl PdfTextSource for StaticTextSource {
    fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
pub struct FailingTextSource;

#[cfg(test)]
impl PdfTextSource for FailingTextSource {
    fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        Err(ExtractionError::DocumentUnreadable("corrupt file".into()))
    }
}
