use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Typed character for the focused field.
    Insert(char),
    Backspace,
    FocusNext,
    /// Submission failed validation.
    Rejected { message: String },
    /// Submission passed validation.
    Accepted,
}

impl Intent for FormIntent {}
