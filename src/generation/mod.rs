//! Name generation: prompt, provider seam, Gemini backend and the
//! text-then-images pipeline.

mod backend;
mod client;
mod error;
mod gemini;
mod prompt;

pub use backend::{GenAiBackend, ImagePayload, ImageRequest, TextRequest};
pub use client::{parse_ideas, to_data_uri, NameGenerationClient, NameGenerator, NameIdea};
pub use error::GenerationError;
pub use gemini::GeminiBackend;
pub use prompt::{build_prompt, response_schema, NAME_COUNT, TEMPERATURE, TOP_P};
