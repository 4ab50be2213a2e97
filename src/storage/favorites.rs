//! Favorites persistence on top of a [`KeyValueStore`].

use std::sync::Arc;

use super::store::KeyValueStore;
use crate::model::NameRecord;

/// Storage key holding the JSON array of favorite records.
pub const FAVORITES_KEY: &str = "favoriteBabyNames";

/// Loads and saves the favorites list.
///
/// Failures never reach the caller: a bad read yields an empty list and a
/// bad write is logged and dropped.
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Vec<NameRecord> {
        let raw = match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load favorites");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<NameRecord>>(&raw) {
            Ok(favorites) => {
                tracing::debug!(count = favorites.len(), "Loaded favorites");
                favorites
            }
            Err(err) => {
                tracing::warn!(error = %err, "Stored favorites are corrupt, starting empty");
                Vec::new()
            }
        }
    }

    pub fn save(&self, favorites: &[NameRecord]) {
        let json = match serde_json::to_string(favorites) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize favorites");
                return;
            }
        };

        if let Err(err) = self.store.set(FAVORITES_KEY, &json) {
            tracing::error!(error = %err, "Failed to save favorites");
        }
    }
}
