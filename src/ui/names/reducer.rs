use crate::share::ShareOutcome;
use crate::ui::mvi::Reducer;

use super::intent::NamesIntent;
use super::state::{NamesState, Notification, COPIED_MESSAGE, COPY_FAILED_MESSAGE};

/// Reducer for generated names, favorites and notifications.
pub struct NamesReducer;

impl Reducer for NamesReducer {
    type State = NamesState;
    type Intent = NamesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NamesIntent::GenerateRequested { request_id } => {
                // Resubmission is disabled while a request is in flight.
                if state.is_loading {
                    return state;
                }
                state.is_loading = true;
                state.error = None;
                state.generated.clear();
                state.active_request = Some(request_id);
                state
            }

            NamesIntent::GenerationSucceeded { request_id, names } => {
                if state.active_request != Some(request_id) {
                    return state;
                }
                state.generated = names;
                state.is_loading = false;
                state.active_request = None;
                state
            }

            NamesIntent::GenerationFailed {
                request_id,
                message,
            } => {
                if state.active_request != Some(request_id) {
                    return state;
                }
                state.error = Some(message);
                state.is_loading = false;
                state.active_request = None;
                state
            }

            NamesIntent::FavoritesLoaded { favorites } => {
                state.favorites = favorites;
                state
            }

            NamesIntent::ToggleFavorite { record } => {
                if state.is_favorite(&record) {
                    state.favorites.retain(|fav| !fav.same_name(&record));
                } else {
                    state.favorites.push(record);
                }
                state
            }

            NamesIntent::ShareFinished {
                outcome,
                expires_at,
            } => {
                let message = match outcome {
                    ShareOutcome::Copied => COPIED_MESSAGE,
                    ShareOutcome::CopyFailed => COPY_FAILED_MESSAGE,
                    ShareOutcome::Shared | ShareOutcome::NativeFailed => return state,
                };
                state.notification = Some(Notification {
                    message: message.to_string(),
                    expires_at,
                });
                state
            }

            NamesIntent::Tick { now } => {
                if state
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.expires_at <= now)
                {
                    state.notification = None;
                }
                state
            }
        }
    }
}
