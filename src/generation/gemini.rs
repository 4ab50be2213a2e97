//! Gemini REST backend (text via `generateContent`, images via Imagen `predict`).

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

use super::backend::{GenAiBackend, ImagePayload, ImageRequest, TextRequest};
use super::error::GenerationError;
use crate::config::{GeminiConfig, SecureString};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini API.
///
/// No request timeout is set; the transport defaults apply.
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    text_model: String,
    image_model: String,
    api_key: SecureString,
}

impl GeminiBackend {
    pub fn new(config: &GeminiConfig, api_key: SecureString) -> Result<Self, GenerationError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    async fn post<Req, Resp>(&self, url: &str, body: &Req) -> Result<Resp, GenerationError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                url = %url,
                status = %status,
                latency_ms,
                error = %error_text,
                "Gemini API error"
            );

            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                message: error_text,
            });
        }

        tracing::debug!(url = %url, status = %status, latency_ms, "Gemini API response");
        Ok(response.json::<Resp>().await?)
    }
}

#[async_trait]
impl GenAiBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate_text(&self, request: &TextRequest) -> Result<String, GenerationError> {
        let url = self.model_url(&self.text_model, "generateContent");
        let body = GenerateContentRequest::from(request);

        tracing::debug!(model = %self.text_model, "Sending text generation request");

        let response: GenerateContentResponse = self.post(&url, &body).await?;
        response.into_text()
    }

    async fn generate_image(
        &self,
        request: &ImageRequest,
    ) -> Result<ImagePayload, GenerationError> {
        let url = self.model_url(&self.image_model, "predict");
        let body = PredictRequest::from(request);

        tracing::debug!(model = %self.image_model, "Sending image generation request");

        let response: PredictResponse = self.post(&url, &body).await?;
        let prediction = response
            .predictions
            .into_iter()
            .find(|p| p.bytes_base64_encoded.is_some())
            .ok_or(GenerationError::MissingContent {
                what: "image predictions",
            })?;

        let encoded = prediction.bytes_base64_encoded.unwrap_or_default();
        let bytes = STANDARD.decode(encoded.trim())?;
        Ok(ImagePayload {
            mime_type: prediction
                .mime_type
                .unwrap_or_else(|| request.output_mime_type.to_string()),
            bytes,
        })
    }
}

/// `generateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
    temperature: f32,
    top_p: f32,
}

impl From<&TextRequest> for GenerateContentRequest {
    fn from(request: &TextRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(request.prompt.clone()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: request.schema.clone(),
                temperature: request.temperature,
                top_p: request.top_p,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Result<String, GenerationError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(GenerationError::MissingContent { what: "candidates" })?;

        Ok(candidate
            .content
            .unwrap_or_default()
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect())
    }
}

/// Imagen `predict` request body.
#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    output_mime_type: &'static str,
    aspect_ratio: &'static str,
}

impl From<&ImageRequest> for PredictRequest {
    fn from(request: &ImageRequest) -> Self {
        Self {
            instances: vec![PredictInstance {
                prompt: request.prompt.clone(),
            }],
            parameters: PredictParameters {
                sample_count: request.number_of_images,
                output_mime_type: request.output_mime_type,
                aspect_ratio: request.aspect_ratio,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}
