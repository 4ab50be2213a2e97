//! Seam between the generation pipeline and a concrete AI provider.

use async_trait::async_trait;
use serde_json::Value;

use super::error::GenerationError;
use super::prompt::{build_prompt, response_schema, TEMPERATURE, TOP_P};
use crate::model::RequestParameters;

/// Structured-output text request.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    pub prompt: String,
    pub schema: Value,
    pub temperature: f32,
    pub top_p: f32,
}

impl TextRequest {
    /// Name request for the given parameters with fixed decoding settings.
    pub fn for_names(params: &RequestParameters) -> Self {
        Self {
            prompt: build_prompt(params),
            schema: response_schema(),
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

/// Single-image request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    pub number_of_images: u32,
    pub output_mime_type: &'static str,
    pub aspect_ratio: &'static str,
}

impl ImageRequest {
    /// One square JPEG for `prompt`.
    pub fn square_jpeg(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            number_of_images: 1,
            output_mime_type: "image/jpeg",
            aspect_ratio: "1:1",
        }
    }
}

/// Decoded image returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// A generative AI provider able to answer text and image requests.
///
/// Implementations must be safe to call concurrently: the pipeline issues
/// all image requests of a batch at once.
#[async_trait]
pub trait GenAiBackend: Send + Sync {
    /// Returns the name of this backend for logging.
    fn name(&self) -> &'static str;

    /// Run a structured-output request and return the raw response text.
    async fn generate_text(&self, request: &TextRequest) -> Result<String, GenerationError>;

    /// Generate exactly one image.
    async fn generate_image(&self, request: &ImageRequest)
        -> Result<ImagePayload, GenerationError>;
}
