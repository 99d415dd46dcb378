use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

/// Fixed sampling temperature for every generation call.
pub const TEMPERATURE: f32 = 0.55;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("upstream error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("upstream returned no extractable text")]
    EmptyReply,

    #[error("unreadable upstream response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Response body of `generateContent`. The API answers with either a
/// `candidates` list or an `error` object; both fields are optional so a
/// single deserialization covers success and failure bodies.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
    pub error: Option<UpstreamErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    /// Older models answer with a flat string instead of content parts.
    pub output: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamErrorBody {
    pub code: Option<u16>,
    pub status: Option<String>,
    pub message: String,
}

/// The two candidate layouts the API is known to produce, plus an explicit
/// fallback for anything else.
#[derive(Debug, PartialEq)]
pub enum CandidateShape {
    Parts(Vec<String>),
    Output(String),
    Unrecognized,
}

impl Candidate {
    pub fn shape(&self) -> CandidateShape {
        if let Some(content) = &self.content {
            let texts: Vec<String> = content
                .parts
                .iter()
                .filter_map(|part| part.text.clone())
                .collect();
            if !texts.is_empty() {
                return CandidateShape::Parts(texts);
            }
        }
        if let Some(output) = &self.output {
            return CandidateShape::Output(output.clone());
        }
        CandidateShape::Unrecognized
    }
}

/// Text of the first candidate, or an empty string when no candidate
/// carries a recognizable layout. Callers treat empty as a soft failure.
pub fn extract_text(response: &GenerateContentResponse) -> String {
    let Some(candidate) = response.candidates.as_ref().and_then(|c| c.first()) else {
        return String::new();
    };
    match candidate.shape() {
        CandidateShape::Parts(parts) => parts.join("\n"),
        CandidateShape::Output(output) => output,
        CandidateShape::Unrecognized => String::new(),
    }
}

/// Client for the generative-language API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_base: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Send the assembled conversation upstream. Fails before any network
    /// traffic when no API key is configured.
    pub async fn generate(
        &self,
        contents: Vec<Content>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, self.model, api_key
        );
        let request = GenerateContentRequest {
            contents,
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(error) = parsed.error {
            return Err(GeminiError::Api {
                status: error.code.unwrap_or_else(|| status.as_u16()),
                message: error.message,
            });
        }
        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: "upstream returned a non-success status".to_string(),
            });
        }

        Ok(parsed)
    }
}
