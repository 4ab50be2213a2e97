//! Error types for the name generation pipeline.

use thiserror::Error;

const EMPTY_RESPONSE_MESSAGE: &str =
    "The API returned an empty response. Please try a different query.";
const PARSE_FAILURE_MESSAGE: &str = "Failed to process the response from the AI. Please try again.";
const GENERIC_FAILURE_MESSAGE: &str =
    "Could not generate names and images. The AI may be unavailable or the request is invalid.";

/// Errors that can occur while generating names and images.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Text model returned nothing (or only whitespace)
    #[error("Upstream returned an empty text response")]
    EmptyResponse,

    /// Text model output was not the expected JSON array
    #[error("Failed to parse generated names: {0}")]
    Parse(#[from] serde_json::Error),

    /// Network or HTTP client failure
    #[error("Request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Upstream answered 200 but without the expected content
    #[error("Upstream response contained no {what}")]
    MissingContent { what: &'static str },

    /// Image payload was not valid base64
    #[error("Invalid image payload: {0}")]
    InvalidImage(#[from] base64::DecodeError),

    /// One image request of the batch failed; the whole batch fails with it
    #[error("Image generation failed for '{name}': {source}")]
    Image {
        name: String,
        #[source]
        source: Box<GenerationError>,
    },
}

impl GenerationError {
    /// Fixed human-readable message for the error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::EmptyResponse => EMPTY_RESPONSE_MESSAGE,
            GenerationError::Parse(_) => PARSE_FAILURE_MESSAGE,
            GenerationError::Transport(_)
            | GenerationError::Upstream { .. }
            | GenerationError::MissingContent { .. }
            | GenerationError::InvalidImage(_)
            | GenerationError::Image { .. } => GENERIC_FAILURE_MESSAGE,
        }
    }
}
