//! The end-to-end pipeline: document bytes in, role analysis out.

use std::sync::Arc;

use thiserror::Error;

use super::analysis::{AnalysisError, AnalysisResult, FailureKind, RoleMatcher};
use super::extraction::{
    ExtractedStrength, ExtractionError, PdfTextExtractor, PdfTextSource, StrengthExtractor,
};
use crate::model::{GeminiClient, GenerativeClient, ModelError};
use crate::reference::tracks::TrackId;

/// Name used when neither the caller nor the report yields one.
pub const DEFAULT_DISPLAY_NAME: &str = "Team Member";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl PipelineError {
    /// A human-readable message for the failing stage. Never exposes prompt
    /// text or low-level error chains; those stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineError::Extraction(e) => match e {
                ExtractionError::WrongDocumentType => {
                    "This does not look like a CliftonStrengths report. \
                     Please upload your official Gallup report."
                }
                ExtractionError::NoStrengthsFound
                | ExtractionError::NoThemesReturned
                | ExtractionError::NoValidThemes
                | ExtractionError::LowConfidenceExtraction { .. } => {
                    "No CliftonStrengths were found in the PDF. \
                     Please upload your official Gallup report."
                }
                _ => "Failed to parse the PDF. Please check the file and try again.",
            },
            PipelineError::Analysis(e) => match e {
                AnalysisError::UnknownTrack(_) => "Please select a valid career track.",
                AnalysisError::NoStrengths => "No strengths provided for analysis.",
                AnalysisError::PromptTooLarge { .. } => {
                    "The input data is too large. Please try with fewer strengths."
                }
                _ => match e.kind() {
                    FailureKind::RateLimited => {
                        "The AI service is currently busy. \
                         Please wait a moment and try again."
                    }
                    FailureKind::Configuration => {
                        "The analysis service is not configured. \
                         Please contact your administrator."
                    }
                    FailureKind::BadResponse => {
                        "The AI response could not be understood. Please try again."
                    }
                    _ => "AI analysis failed. Please try again.",
                },
            },
        }
    }
}

/// Everything a caller needs to render results: the extracted strengths, the
/// resolved display name, whether the vision fallback ran, and the analysis.
#[derive(Debug)]
pub struct PipelineReport {
    pub strengths: Vec<ExtractedStrength>,
    pub name: String,
    pub used_vision_fallback: bool,
    pub analysis: AnalysisResult,
}

/// Stateless request pipeline. One instance can serve concurrent callers;
/// nothing here is mutated per request.
pub struct StrengthPipeline {
    extractor: StrengthExtractor,
    matcher: RoleMatcher,
}

impl StrengthPipeline {
    pub fn new(pdf: Box<dyn PdfTextSource>, model: Arc<dyn GenerativeClient>) -> Self {
        Self {
            extractor: StrengthExtractor::new(pdf, model.clone()),
            matcher: RoleMatcher::new(model),
        }
    }

    /// Production wiring: local PDF text extraction plus the Gemini client
    /// configured from the environment.
    pub fn from_env() -> Result<Self, ModelError> {
        let model: Arc<dyn GenerativeClient> = Arc::new(GeminiClient::from_env()?);
        Ok(Self::new(Box::new(PdfTextExtractor), model))
    }

    /// Run the full pipeline for one uploaded document.
    ///
    /// The track id is validated up front so a bad track fails before the
    /// document is even opened. Name resolution order: caller-supplied
    /// display name, then the name recovered from the report, then the
    /// default.
    pub fn analyze(
        &self,
        pdf_bytes: &[u8],
        track_id: &str,
        display_name: Option<&str>,
    ) -> Result<PipelineReport, PipelineError> {
        if TrackId::parse(track_id).is_none() {
            return Err(AnalysisError::UnknownTrack(track_id.to_string()).into());
        }

        let outcome = self.extractor.extract(pdf_bytes)?;

        let name = display_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .or_else(|| {
                (!outcome.extracted_name.is_empty()).then(|| outcome.extracted_name.clone())
            })
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

        tracing::info!(
            name = %name,
            strengths = outcome.strengths.len(),
            vision = outcome.used_vision_fallback,
            track = track_id,
            "extraction complete, starting role analysis"
        );

        let analysis = self
            .matcher
            .match_roles(&outcome.strengths, track_id, &name)?;

        Ok(PipelineReport {
            strengths: outcome.strengths,
            name,
            used_vision_fallback: outcome.used_vision_fallback,
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MockModelClient;
    use crate::pipeline::extraction::types::StaticTextSource;

    fn report_text() -> String {
        "Gallup CliftonStrengths report for Jamie Fox\n\
         1. Strategic\n2. Achiever\n3. Empathy\n4. Learner\n5. Focus\n"
            .into()
    }

    fn analysis_reply() -> String {
        r#"{
            "strengthDomains": {"dominantDomain": "Strategic Thinking"},
            "topRoleMatches": [{"rank": 1, "role": "Full Stack Engineer", "fitScore": 90}],
            "teamComplementarity": {"yourContribution": "Momentum."}
        }"#
        .into()
    }

    fn pipeline(mock: Arc<MockModelClient>) -> StrengthPipeline {
        StrengthPipeline::new(Box::new(StaticTextSource(report_text())), mock)
    }

    #[test]
    fn end_to_end_text_path() {
        let mock = Arc::new(MockModelClient::new(&analysis_reply()));
        let report = pipeline(mock.clone())
            .analyze(b"pdf", "modern_engineering", None)
            .unwrap();
        assert_eq!(report.strengths.len(), 5);
        assert_eq!(report.name, "Jamie Fox");
        assert!(!report.used_vision_fallback);
        assert_eq!(report.analysis.top_role_matches[0].role, "Full Stack Engineer");
        // Confident text extraction means exactly one model call, the analysis.
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn explicit_display_name_wins_over_extracted() {
        let mock = Arc::new(MockModelClient::new(&analysis_reply()));
        let report = pipeline(mock)
            .analyze(b"pdf", "tech_delivery", Some("Priya Shah"))
            .unwrap();
        assert_eq!(report.name, "Priya Shah");
    }

    #[test]
    fn blank_display_name_falls_through_to_extracted() {
        let mock = Arc::new(MockModelClient::new(&analysis_reply()));
        let report = pipeline(mock)
            .analyze(b"pdf", "tech_delivery", Some("   "))
            .unwrap();
        assert_eq!(report.name, "Jamie Fox");
    }

    #[test]
    fn nameless_report_gets_the_default() {
        let mock = Arc::new(MockModelClient::new(&analysis_reply()));
        let text = "Gallup CliftonStrengths assessment results\n\
                    1. Strategic\n2. Achiever\n3. Empathy\n4. Learner\n5. Focus\n";
        let pipeline =
            StrengthPipeline::new(Box::new(StaticTextSource(text.into())), mock);
        let report = pipeline.analyze(b"pdf", "tech_delivery", None).unwrap();
        assert_eq!(report.name, DEFAULT_DISPLAY_NAME);
    }

    #[test]
    fn bad_track_fails_before_extraction_or_any_model_call() {
        let mock = Arc::new(MockModelClient::new(&analysis_reply()));
        let result = pipeline(mock.clone()).analyze(b"pdf", "consulting", None);
        assert!(matches!(
            result,
            Err(PipelineError::Analysis(AnalysisError::UnknownTrack(_)))
        ));
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn user_messages_are_stage_specific() {
        let wrong_doc = PipelineError::Extraction(ExtractionError::WrongDocumentType);
        assert!(wrong_doc.user_message().contains("Gallup report"));

        let busy = PipelineError::Analysis(AnalysisError::Model(
            ModelError::RateLimited("quota".into()),
        ));
        assert!(busy.user_message().contains("currently busy"));

        let bad_track = PipelineError::Analysis(AnalysisError::UnknownTrack("x".into()));
        assert_eq!(bad_track.user_message(), "Please select a valid career track.");

        let garbled = PipelineError::Analysis(AnalysisError::IncompleteResponse);
        assert!(garbled.user_message().contains("could not be understood"));
    }
}
