use std::time::Instant;

use crate::model::NameRecord;
use crate::share::ShareOutcome;
use crate::ui::mvi::Intent;

/// Intents handled by [`super::NamesReducer`].
#[derive(Debug, Clone)]
pub enum NamesIntent {
    /// A generation was dispatched.
    GenerateRequested { request_id: u64 },

    /// Generation finished with records.
    GenerationSucceeded {
        request_id: u64,
        names: Vec<NameRecord>,
    },

    /// Generation failed; `message` is the banner text.
    GenerationFailed { request_id: u64, message: String },

    /// Favorites read from storage at startup.
    FavoritesLoaded { favorites: Vec<NameRecord> },

    /// Add the record, or remove every favorite with the same name.
    ToggleFavorite { record: NameRecord },

    /// A share attempt completed.
    ShareFinished {
        outcome: ShareOutcome,
        expires_at: Instant,
    },

    /// Clock advanced; expires the notification.
    Tick { now: Instant },
}

impl Intent for NamesIntent {}
