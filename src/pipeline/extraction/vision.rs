use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use super::types::{rerank, ExtractedStrength, StrengthExtraction};
use super::ExtractionError;
use crate::model::{ContentPart, GenerationOptions, GenerativeClient};
use crate::pipeline::strip_code_fences;
use crate::reference::themes::{domain_of, is_known_theme, Domain};

/// Structured extraction, not creative generation: near-deterministic sampling
/// and a bounded output budget.
const VISION_TEMPERATURE: f32 = 0.1;
const VISION_MAX_OUTPUT_TOKENS: u32 = 4000;

/// Total attempts (one retry) with a short pause between them.
const VISION_ATTEMPTS: usize = 2;
const RETRY_PAUSE: Duration = Duration::from_secs(2);

/// A reply is suspect only when invalid entries pile up AND few valid ones
/// remain (a model hallucinating a majority-invalid list). One or two stray
/// names alongside real themes are tolerated and dropped.
const MIN_CONFIDENT_THEMES: usize = 5;
const MAX_TOLERATED_INVALID: usize = 2;

const MAX_THEMES: usize = 34;

const EXTRACTION_PROMPT: &str = r#"Extract ALL CliftonStrengths themes from this Gallup report.

Return ONLY valid JSON, no markdown, no backticks, no preamble:
{
  "candidateName": "the person's name if visible on the report, otherwise null",
  "themes": [
    { "rank": 1, "name": "Achiever", "domain": "Executing" },
    { "rank": 2, "name": "Strategic", "domain": "Strategic Thinking" }
  ]
}

Rules:
- Include ALL themes visible in the report, ranked from 1 to however many are shown (could be 5, 10, or 34)
- Use the exact official CliftonStrengths theme names
- Map each theme to its correct domain: Executing, Influencing, Relationship Building, or Strategic Thinking
- If the report shows the full 34, include all 34
- If it only shows top 5 or top 10, include only what's visible"#;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisionReply {
    #[serde(default)]
    candidate_name: Option<String>,
    #[serde(default)]
    themes: Vec<VisionTheme>,
}

#[derive(Deserialize)]
struct VisionTheme {
    #[serde(default)]
    rank: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    domain: Option<String>,
}

/// Fallback extractor: sends the raw document to the generative model and
/// validates the structured reply against the closed vocabulary.
pub struct VisionExtractor {
    model: Arc<dyn GenerativeClient>,
}

impl VisionExtractor {
    pub fn new(model: Arc<dyn GenerativeClient>) -> Self {
        Self { model }
    }

    pub fn extract(&self, pdf_bytes: &[u8]) -> Result<StrengthExtraction, ExtractionError> {
        let parts = [
            ContentPart::InlineData {
                mime_type: "application/pdf".into(),
                data: pdf_bytes.to_vec(),
            },
            ContentPart::Text(EXTRACTION_PROMPT.into()),
        ];
        let options = GenerationOptions {
            temperature: VISION_TEMPERATURE,
            max_output_tokens: VISION_MAX_OUTPUT_TOKENS,
            json_response: true,
        };

        let mut reply = String::new();
        let mut last_error: Option<ExtractionError> = None;

        for attempt in 0..VISION_ATTEMPTS {
            match self.model.generate(&parts, &options) {
                Ok(text) if !text.trim().is_empty() => {
                    reply = text;
                    break;
                }
                Ok(_) => {
                    tracing::warn!(attempt = attempt + 1, "vision extraction reply was empty");
                }
                Err(e) => {
                    tracing::warn!(attempt = attempt + 1, error = %e, "vision extraction call failed");
                    last_error = Some(e.into());
                }
            }
            if attempt + 1 < VISION_ATTEMPTS {
                std::thread::sleep(RETRY_PAUSE);
            }
        }

        if reply.trim().is_empty() {
            return Err(last_error.unwrap_or(ExtractionError::EmptyReply));
        }

        parse_vision_reply(&reply)
    }
}

/// Parse and validate a vision reply independent of transport.
fn parse_vision_reply(reply: &str) -> Result<StrengthExtraction, ExtractionError> {
    let json_text = strip_code_fences(reply);
    let parsed: VisionReply = serde_json::from_str(json_text)
        .map_err(|e| ExtractionError::InvalidResponseFormat(e.to_string()))?;

    if parsed.themes.is_empty() {
        return Err(ExtractionError::NoThemesReturned);
    }

    let total = parsed.themes.len();
    let valid: Vec<&VisionTheme> = parsed
        .themes
        .iter()
        .filter(|t| is_known_theme(&t.name))
        .collect();
    let invalid = total - valid.len();

    if valid.is_empty() {
        return Err(ExtractionError::NoValidThemes);
    }
    if invalid > MAX_TOLERATED_INVALID && valid.len() < MIN_CONFIDENT_THEMES {
        return Err(ExtractionError::LowConfidenceExtraction {
            invalid,
            valid: valid.len(),
        });
    }

    let mut strengths: Vec<ExtractedStrength> = valid
        .iter()
        .enumerate()
        .map(|(i, t)| {
            // The table owns the name-to-domain mapping; the model's claim is
            // only worth a log line when it disagrees.
            let table_domain = domain_of(&t.name);
            if let Some(claimed) = t.domain.as_deref() {
                if table_domain != Domain::Unknown && claimed != table_domain.as_str() {
                    tracing::warn!(
                        theme = %t.name,
                        claimed,
                        actual = table_domain.as_str(),
                        "vision reply misattributed a theme's domain"
                    );
                }
            }
            ExtractedStrength {
                rank: if t.rank > 0 { t.rank } else { i as u32 + 1 },
                name: t.name.clone(),
                description: String::new(),
            }
        })
        .collect();

    rerank(&mut strengths);
    strengths.truncate(MAX_THEMES);

    let extracted_name = parsed
        .candidate_name
        .map(|n| n.trim().to_string())
        .unwrap_or_default();

    Ok(StrengthExtraction {
        strengths,
        extracted_name,
    })
}
