use crate::model::{RequestParameters, ValidationError};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Culture,
    Letter,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Culture => FormField::Letter,
            FormField::Letter => FormField::Culture,
        }
    }
}

/// Input form contents.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub culture: String,
    /// At most one character, uppercased on entry.
    pub letter: String,
    pub focused: FormField,
    /// Inline validation message.
    pub error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            culture: "Japanese".to_string(),
            letter: "A".to_string(),
            focused: FormField::Culture,
            error: None,
        }
    }
}

impl UiState for FormState {}

impl FormState {
    pub fn to_params(&self) -> Result<RequestParameters, ValidationError> {
        RequestParameters::new(&self.culture, &self.letter)
    }
}
