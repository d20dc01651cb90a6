use serde_json::Value;

use super::types::AnalysisResult;
use super::AnalysisError;
use crate::pipeline::strip_code_fences;

/// Top-level keys that must be present and non-null for the reply to count
/// as structurally complete.
const REQUIRED_KEYS: [&str; 3] = ["strengthDomains", "topRoleMatches", "teamComplementarity"];

/// Parse a raw model reply into an [`AnalysisResult`].
///
/// Fenced JSON is unwrapped first. Structural validation is two-stage: the
/// required top-level keys are checked on the raw value so a truncated reply
/// surfaces as incomplete rather than as a generic deserialization error,
/// then the typed deserialization applies the lenient nested defaults.
pub fn parse_analysis_response(reply: &str) -> Result<AnalysisResult, AnalysisError> {
    let json_text = strip_code_fences(reply).trim();

    let value: Value = serde_json::from_str(json_text)
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    for key in REQUIRED_KEYS {
        if value.get(key).map_or(true, Value::is_null) {
            tracing::warn!(missing = key, "analysis reply is structurally incomplete");
            return Err(AnalysisError::IncompleteResponse);
        }
    }
    if value["topRoleMatches"].as_array().map_or(true, Vec::is_empty) {
        tracing::warn!("analysis reply contained no role matches");
        return Err(AnalysisError::IncompleteResponse);
    }

    serde_json::from_value(value).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}
