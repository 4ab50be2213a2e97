//! Names feature: generated results, favorites, share notifications.
//!
//! - `state.rs` - Data rendered by the cards, banner and toast
//! - `intent.rs` - User actions and side-effect results
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::NamesIntent;
pub use reducer::NamesReducer;
pub use state::{NamesState, Notification, COPIED_MESSAGE, COPY_FAILED_MESSAGE};
