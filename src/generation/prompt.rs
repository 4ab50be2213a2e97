//! Prompt text and response schema for the name request.

use serde_json::{json, Value};

use crate::model::RequestParameters;

/// Number of names requested per generation.
pub const NAME_COUNT: usize = 6;

/// Decoding parameters for the text request.
pub const TEMPERATURE: f32 = 0.8;
pub const TOP_P: f32 = 0.9;

/// Natural-language prompt embedding the culture and starting letter.
pub fn build_prompt(params: &RequestParameters) -> String {
    format!(
        "Generate {count} baby names from {culture} culture that start with the letter '{letter}'. \
         For each name, provide its meaning. Also, for each name, create a short, creative, and \
         descriptive prompt for an image generation model to create an abstract and artistic \
         visual representation based on the name's meaning and origin. This prompt should \
         describe a beautiful and ethereal scene or concept.",
        count = NAME_COUNT,
        culture = params.culture(),
        letter = params.starting_letter(),
    )
}

/// Structured-output schema: an array of `{name, meaning, imagePrompt}`.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": {
                    "type": "STRING",
                    "description": "The generated baby name."
                },
                "meaning": {
                    "type": "STRING",
                    "description": "The meaning of the baby name."
                },
                "imagePrompt": {
                    "type": "STRING",
                    "description": "A creative and artistic prompt for an image generation model, based on the name's meaning and origin."
                }
            },
            "required": ["name", "meaning", "imagePrompt"]
        }
    })
}
