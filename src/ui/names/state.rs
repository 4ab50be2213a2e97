use std::time::Instant;

use crate::model::NameRecord;
use crate::ui::mvi::UiState;

/// Toast shown after a clipboard share.
pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy.";

/// Transient message that disappears on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

/// Everything the name views render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamesState {
    /// Result of the latest generation. Empty while a request is in flight.
    pub generated: Vec<NameRecord>,
    /// Favorites in insertion order.
    pub favorites: Vec<NameRecord>,
    pub is_loading: bool,
    /// Banner text of the last failed generation.
    pub error: Option<String>,
    pub notification: Option<Notification>,
    /// Id of the generation whose outcome is awaited.
    pub active_request: Option<u64>,
}

impl UiState for NamesState {}

impl NamesState {
    /// Favorite status is looked up by name, never stored on the record.
    pub fn is_favorite(&self, record: &NameRecord) -> bool {
        self.favorites.iter().any(|fav| fav.same_name(record))
    }

    pub fn notification_message(&self) -> Option<&str> {
        self.notification.as_ref().map(|n| n.message.as_str())
    }

    /// Nothing generated, nothing loading, no error.
    pub fn is_idle_empty(&self) -> bool {
        !self.is_loading && self.error.is_none() && self.generated.is_empty()
    }
}
