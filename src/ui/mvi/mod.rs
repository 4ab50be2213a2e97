//! Model-View-Intent (MVI) primitives.
//!
//! Every state change in the application goes through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain data, everything a view needs
//! - **Intent**: a user action or a completed side effect
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Side effects (network, storage, clipboard) live outside the reducers and
//! report back by dispatching another intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
