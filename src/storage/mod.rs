//! Local persistence of favorites.

mod favorites;
mod store;

pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};
