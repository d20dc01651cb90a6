use base64::Engine as _;
use serde::Deserialize;
use serde_json::json;

use super::ModelError;
use crate::config::GeminiConfig;

/// One piece of request content. Documents go in as inline bytes; the client
/// handles base64 encoding on the wire.
#[derive(Debug, Clone)]
pub enum ContentPart {
    Text(String),
    InlineData { mime_type: String, data: Vec<u8> },
}

/// Per-call sampling and output settings.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Ask for `application/json` output. The reply must still be validated:
    /// models occasionally wrap JSON in Markdown fences anyway.
    pub json_response: bool,
}

/// Generative model abstraction (allows mocking). May return an empty string
/// without erroring — callers must check for that explicitly.
pub trait GenerativeClient: Send + Sync {
    fn generate(
        &self,
        parts: &[ContentPart],
        options: &GenerationOptions,
    ) -> Result<String, ModelError>;
}

/// HTTP client for the Gemini generateContent API.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, ModelError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ModelError::HttpClient(e.to_string()))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Build a client from `GEMINI_API_KEY` and related environment variables.
    pub fn from_env() -> Result<Self, ModelError> {
        Self::new(&GeminiConfig::from_env()?)
    }

    fn request_body(parts: &[ContentPart], options: &GenerationOptions) -> serde_json::Value {
        let wire_parts: Vec<serde_json::Value> = parts
            .iter()
            .map(|p| match p {
                ContentPart::Text(text) => json!({ "text": text }),
                ContentPart::InlineData { mime_type, data } => json!({
                    "inlineData": {
                        "mimeType": mime_type,
                        "data": base64::engine::general_purpose::STANDARD.encode(data),
                    }
                }),
            })
            .collect();

        let mut generation_config = json!({
            "temperature": options.temperature,
            "maxOutputTokens": options.max_output_tokens,
        });
        if options.json_response {
            generation_config["responseMimeType"] = json!("application/json");
        }

        json!({
            "contents": [{ "role": "user", "parts": wire_parts }],
            "generationConfig": generation_config,
        })
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerativeClient for GeminiClient {
    fn generate(
        &self,
        parts: &[ContentPart],
        options: &GenerationOptions,
    ) -> Result<String, ModelError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = Self::request_body(parts, options);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ModelError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    ModelError::Timeout(self.timeout_secs)
                } else {
                    ModelError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            if status.as_u16() == 429 || body.contains("RESOURCE_EXHAUSTED") {
                return Err(ModelError::RateLimited(body));
            }
            return Err(ModelError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| ModelError::ResponseParsing(e.to_string()))?;

        // An empty reply is not an error at this layer; every caller checks
        // for it explicitly.
        let text: String = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| {
                c.parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(text)
    }
}

/// Mock model client for testing — returns queued responses and counts calls.
#[cfg(any(test, feature = "testing"))]
pub struct MockModelClient {
    responses: std::sync::Mutex<std::collections::VecDeque<Result<String, ModelError>>>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "testing"))]
impl MockModelClient {
    pub fn new(response: &str) -> Self {
        Self::with_results(vec![Ok(response.to_string())])
    }

    pub fn with_results(results: Vec<Result<String, ModelError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(results.into_iter().collect()),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "testing"))]
impl GenerativeClient for MockModelClient {
    fn generate(
        &self,
        _parts: &[ContentPart],
        _options: &GenerationOptions,
    ) -> Result<String, ModelError> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let mut queue = self.responses.lock().unwrap();
        match queue.len() {
            0 => Ok(String::new()),
            // The last queued result repeats for any further calls.
            1 => match queue.front().unwrap() {
                Ok(s) => Ok(s.clone()),
                Err(e) => Err(clone_error(e)),
            },
            _ => queue.pop_front().unwrap(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
fn clone_error(e: &ModelError) -> ModelError {
    match e {
        ModelError::MissingApiKey => ModelError::MissingApiKey,
        ModelError::Connection(s) => ModelError::Connection(s.clone()),
        ModelError::Timeout(t) => ModelError::Timeout(*t),
        ModelError::RateLimited(s) => ModelError::RateLimited(s.clone()),
        ModelError::Api { status, body } => ModelError::Api {
            status: *status,
            body: body.clone(),
        },
        ModelError::HttpClient(s) => ModelError::HttpClient(s.clone()),
        ModelError::ResponseParsing(s) => ModelError::ResponseParsing(s.clone()),
    }
}
