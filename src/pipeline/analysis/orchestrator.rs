use std::sync::Arc;

use super::parser::parse_analysis_response;
use super::prompt::{build_analysis_prompt, MAX_PROMPT_CHARS};
use super::types::AnalysisResult;
use super::AnalysisError;
use crate::model::{ContentPart, GenerationOptions, GenerativeClient};
use crate::pipeline::extraction::ExtractedStrength;
use crate::reference::tracks::{track_for, TrackId};

/// Narrative generation wants variety; the structural constraints live in the
/// prompt schema, not in the sampling temperature.
const ANALYSIS_TEMPERATURE: f32 = 1.0;
const ANALYSIS_MAX_OUTPUT_TOKENS: u32 = 65_535;

/// Ranks a candidate's strengths against the role catalog via the generative
/// model and validates the structured reply.
pub struct RoleMatcher {
    model: Arc<dyn GenerativeClient>,
}

impl RoleMatcher {
    pub fn new(model: Arc<dyn GenerativeClient>) -> Self {
        Self { model }
    }

    /// All input validation happens before the model call: empty strengths,
    /// an unrecognized track id, or an oversized prompt never cost a network
    /// round trip.
    pub fn match_roles(
        &self,
        strengths: &[ExtractedStrength],
        track_id: &str,
        display_name: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        if strengths.is_empty() {
            return Err(AnalysisError::NoStrengths);
        }
        let track_id = TrackId::parse(track_id)
            .ok_or_else(|| AnalysisError::UnknownTrack(track_id.to_string()))?;
        let track = track_for(track_id);

        let prompt = build_analysis_prompt(display_name, strengths, track);
        if prompt.len() > MAX_PROMPT_CHARS {
            return Err(AnalysisError::PromptTooLarge {
                size: prompt.len(),
                limit: MAX_PROMPT_CHARS,
            });
        }

        tracing::info!(
            strengths = strengths.len(),
            track = track.title,
            prompt_chars = prompt.len(),
            "requesting role analysis"
        );

        let options = GenerationOptions {
            temperature: ANALYSIS_TEMPERATURE,
            max_output_tokens: ANALYSIS_MAX_OUTPUT_TOKENS,
            json_response: true,
        };
        let reply = self
            .model
            .generate(&[ContentPart::Text(prompt)], &options)?;

        if reply.trim().is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }

        let analysis = parse_analysis_response(&reply)?;
        tracing::info!(
            matches = analysis.top_role_matches.len(),
            outside_track = analysis.top_roles_outside_track.len(),
            "role analysis complete"
        );
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MockModelClient, ModelError};

    fn strengths() -> Vec<ExtractedStrength> {
        ["Strategic", "Achiever", "Learner", "Empathy", "Focus"]
            .iter()
            .enumerate()
            .map(|(i, name)| ExtractedStrength {
                rank: i as u32 + 1,
                name: (*name).into(),
                description: String::new(),
            })
            .collect()
    }

    fn good_reply() -> String {
        r#"{
            "strengthDomains": {"dominantDomain": "Strategic Thinking"},
            "topRoleMatches": [{"rank": 1, "role": "Full Stack Engineer", "fitScore": 91}],
            "teamComplementarity": {"yourContribution": "Direction."}
        }"#
        .into()
    }

    #[test]
    fn happy_path_returns_parsed_analysis() {
        let mock = Arc::new(MockModelClient::new(&good_reply()));
        let matcher = RoleMatcher::new(mock.clone());
        let analysis = matcher
            .match_roles(&strengths(), "modern_engineering", "Alex Rivera")
            .unwrap();
        assert_eq!(analysis.top_role_matches[0].role, "Full Stack Engineer");
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn empty_strengths_fail_before_any_call() {
        let mock = Arc::new(MockModelClient::new(&good_reply()));
        let matcher = RoleMatcher::new(mock.clone());
        let result = matcher.match_roles(&[], "tech_delivery", "Alex Rivera");
        assert!(matches!(result, Err(AnalysisError::NoStrengths)));
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn unknown_track_fails_before_any_call() {
        let mock = Arc::new(MockModelClient::new(&good_reply()));
        let matcher = RoleMatcher::new(mock.clone());
        let result = matcher.match_roles(&strengths(), "consulting", "Alex Rivera");
        match result {
            Err(AnalysisError::UnknownTrack(id)) => assert_eq!(id, "consulting"),
            other => panic!("expected UnknownTrack, got {other:?}"),
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn oversized_prompt_fails_before_any_call() {
        let mock = Arc::new(MockModelClient::new(&good_reply()));
        let matcher = RoleMatcher::new(mock.clone());
        let mut many = strengths();
        many[0].description = "x".repeat(MAX_PROMPT_CHARS);
        let result = matcher.match_roles(&many, "tech_transformation", "Alex Rivera");
        assert!(matches!(result, Err(AnalysisError::PromptTooLarge { .. })));
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn empty_reply_is_empty_response() {
        let mock = Arc::new(MockModelClient::new("   "));
        let matcher = RoleMatcher::new(mock);
        let result = matcher.match_roles(&strengths(), "tech_delivery", "Alex Rivera");
        assert!(matches!(result, Err(AnalysisError::EmptyResponse)));
    }

    #[test]
    fn model_error_propagates_with_rate_limit_kind() {
        let mock = Arc::new(MockModelClient::with_results(vec![Err(
            ModelError::RateLimited("quota exceeded".into()),
        )]));
        let matcher = RoleMatcher::new(mock);
        let err = matcher
            .match_roles(&strengths(), "tech_delivery", "Alex Rivera")
            .unwrap_err();
        assert_eq!(err.kind(), crate::pipeline::analysis::FailureKind::RateLimited);
    }
}
