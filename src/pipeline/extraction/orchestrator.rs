use std::sync::Arc;

use super::text_parse::extract_from_text;
use super::types::{ExtractionOutcome, PdfTextSource, StrengthExtraction};
use super::vision::VisionExtractor;
use super::ExtractionError;
use crate::model::GenerativeClient;

/// A text pass that recovers fewer than this many strengths is treated as
/// low-confidence and supplemented by the vision pass.
const MIN_CONFIDENT_STRENGTHS: usize = 5;

/// Orchestrates the two extraction strategies: fast text parsing first, vision
/// fallback when text parsing fails or looks low-confidence.
///
/// The states are: text only, text plus vision, failed. Each transition is an
/// explicit branch and gets a log line.
pub struct StrengthExtractor {
    pdf: Box<dyn PdfTextSource>,
    vision: VisionExtractor,
}

impl StrengthExtractor {
    pub fn new(pdf: Box<dyn PdfTextSource>, model: Arc<dyn GenerativeClient>) -> Self {
        Self {
            pdf,
            vision: VisionExtractor::new(model),
        }
    }

    /// Fails only when both strategies produced zero strengths; the wrapped
    /// cause is the most relevant underlying error.
    pub fn extract(&self, pdf_bytes: &[u8]) -> Result<ExtractionOutcome, ExtractionError> {
        let mut text_result: Option<StrengthExtraction> = None;
        let mut text_error: Option<ExtractionError> = None;

        match extract_from_text(&*self.pdf, pdf_bytes) {
            Ok(result) => {
                tracing::info!(strengths = result.strengths.len(), "text extraction succeeded");
                if result.strengths.len() >= MIN_CONFIDENT_STRENGTHS {
                    return Ok(ExtractionOutcome {
                        strengths: result.strengths,
                        extracted_name: result.extracted_name,
                        used_vision_fallback: false,
                    });
                }
                text_result = Some(result);
            }
            Err(e) => {
                tracing::warn!(error = %e, "text extraction failed, trying vision");
                text_error = Some(e);
            }
        }

        // Low-confidence or failed text pass: try to improve coverage via the
        // vision pass. When it runs, vision saw the whole layout, so its name
        // supersedes the text pass's guess.
        match self.vision.extract(pdf_bytes) {
            Ok(vision_result) => {
                tracing::info!(
                    strengths = vision_result.strengths.len(),
                    "vision extraction succeeded"
                );
                let text_name = text_result.map(|r| r.extracted_name).unwrap_or_default();
                let extracted_name = if vision_result.extracted_name.is_empty() {
                    text_name
                } else {
                    vision_result.extracted_name
                };
                Ok(ExtractionOutcome {
                    strengths: vision_result.strengths,
                    extracted_name,
                    used_vision_fallback: true,
                })
            }
            Err(vision_error) => {
                // Degrade gracefully: a short text result beats no result.
                // The flag stays false here since no vision output was used.
                if let Some(result) = text_result.filter(|r| !r.strengths.is_empty()) {
                    tracing::warn!(
                        error = %vision_error,
                        strengths = result.strengths.len(),
                        "vision extraction failed, keeping low-confidence text result"
                    );
                    return Ok(ExtractionOutcome {
                        strengths: result.strengths,
                        extracted_name: result.extracted_name,
                        used_vision_fallback: false,
                    });
                }
                tracing::error!(
                    vision_error = %vision_error,
                    text_error = text_error.as_ref().map(|e| e.to_string()),
                    "both extraction strategies failed"
                );
                Err(ExtractionError::ExtractionFailed(Box::new(vision_error)))
            }
        }
    }
}
