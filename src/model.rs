//! Core data types shared by the generation pipeline, the state controller
//! and persistence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A generated name with its meaning and an illustrative image reference.
///
/// Identity is the `name` field: favorites and duplicate checks compare
/// names only, so two records with the same name are treated as one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    pub name: String,
    pub meaning: String,
    /// Data URI or remote URL.
    pub image_url: String,
}

impl NameRecord {
    pub fn new(
        name: impl Into<String>,
        meaning: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            meaning: meaning.into(),
            image_url: image_url.into(),
        }
    }

    /// Name-based identity check.
    pub fn same_name(&self, other: &NameRecord) -> bool {
        self.name == other.name
    }
}

/// Input rejected before anything is sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Both fields are required.")]
    MissingField,

    #[error("Please enter a single valid letter.")]
    InvalidLetter,
}

/// Validated generation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    culture: String,
    starting_letter: char,
}

impl RequestParameters {
    /// Validate raw form input.
    ///
    /// The culture is trimmed and must be non-empty. The letter must be
    /// exactly one ASCII alphabetic character in either case; it is stored
    /// uppercased.
    pub fn new(culture: &str, letter: &str) -> Result<Self, ValidationError> {
        let culture = culture.trim();
        let letter = letter.trim();
        if culture.is_empty() || letter.is_empty() {
            return Err(ValidationError::MissingField);
        }

        let mut chars = letter.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(ValidationError::InvalidLetter);
        };
        if !ch.is_ascii_alphabetic() {
            return Err(ValidationError::InvalidLetter);
        }

        Ok(Self {
            culture: culture.to_string(),
            starting_letter: ch.to_ascii_uppercase(),
        })
    }

    pub fn culture(&self) -> &str {
        &self.culture
    }

    pub fn starting_letter(&self) -> char {
        self.starting_letter
    }
}
