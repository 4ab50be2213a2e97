use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormField, FormState};

/// Maximum culture length accepted from the keyboard.
const MAX_CULTURE_LEN: usize = 64;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert(ch) if ch.is_control() => {}
            FormIntent::Insert(ch) => match state.focused {
                FormField::Culture => {
                    if state.culture.chars().count() < MAX_CULTURE_LEN {
                        state.culture.push(ch);
                    }
                }
                FormField::Letter => {
                    if state.letter.is_empty() {
                        state.letter.extend(ch.to_uppercase());
                    }
                }
            },
            FormIntent::Backspace => {
                match state.focused {
                    FormField::Culture => state.culture.pop(),
                    FormField::Letter => state.letter.pop(),
                };
            }
            FormIntent::FocusNext => state.focused = state.focused.next(),
            FormIntent::Rejected { message } => state.error = Some(message),
            FormIntent::Accepted => state.error = None,
        }
        state
    }
}
