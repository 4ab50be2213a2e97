//! Name generation pipeline: one text request, then a parallel image fan-out.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::future::try_join_all;
use serde::Deserialize;
use std::time::Instant;

use super::backend::{GenAiBackend, ImagePayload, ImageRequest, TextRequest};
use super::error::GenerationError;
use crate::model::{NameRecord, RequestParameters};

/// Produces name records for validated parameters.
///
/// The state controller only depends on this trait, so tests can swap in a
/// scripted generator.
#[async_trait]
pub trait NameGenerator: Send + Sync {
    async fn generate(
        &self,
        params: &RequestParameters,
    ) -> Result<Vec<NameRecord>, GenerationError>;
}

/// One entry of the text model's structured output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameIdea {
    pub name: String,
    pub meaning: String,
    pub image_prompt: String,
}

/// Parse the structured-output text into name ideas.
///
/// Whitespace-only text is an empty response, not a parse failure.
pub fn parse_ideas(text: &str) -> Result<Vec<NameIdea>, GenerationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(serde_json::from_str(text)?)
}

/// Encode an image payload as a `data:` URI.
pub fn to_data_uri(payload: &ImagePayload) -> String {
    format!(
        "data:{};base64,{}",
        payload.mime_type,
        STANDARD.encode(&payload.bytes)
    )
}

/// Generation client over any [`GenAiBackend`].
pub struct NameGenerationClient<B> {
    backend: B,
}

impl<B: GenAiBackend> NameGenerationClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn illustrate(&self, idea: &NameIdea) -> Result<String, GenerationError> {
        let request = ImageRequest::square_jpeg(idea.image_prompt.clone());
        let payload = self
            .backend
            .generate_image(&request)
            .await
            .map_err(|source| GenerationError::Image {
                name: idea.name.clone(),
                source: Box::new(source),
            })?;
        Ok(to_data_uri(&payload))
    }
}

#[async_trait]
impl<B: GenAiBackend> NameGenerator for NameGenerationClient<B> {
    async fn generate(
        &self,
        params: &RequestParameters,
    ) -> Result<Vec<NameRecord>, GenerationError> {
        let start = Instant::now();
        tracing::info!(
            backend = self.backend.name(),
            culture = %params.culture(),
            letter = %params.starting_letter(),
            "Generating names"
        );

        let request = TextRequest::for_names(params);
        let text = self.backend.generate_text(&request).await?;
        let ideas = parse_ideas(&text)?;

        tracing::debug!(count = ideas.len(), "Parsed name ideas, requesting images");

        // All-or-nothing: the first failed image fails the whole batch.
        let images = try_join_all(ideas.iter().map(|idea| self.illustrate(idea))).await?;

        let records: Vec<NameRecord> = ideas
            .into_iter()
            .zip(images)
            .map(|(idea, image_url)| NameRecord::new(idea.name, idea.meaning, image_url))
            .collect();

        tracing::info!(
            count = records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Generated names"
        );
        Ok(records)
    }
}
