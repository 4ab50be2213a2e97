//! Terminal front-end.
//!
//! `mvi` holds the reducer primitives; `names` and `form` are the two
//! features built on them. Everything else is rendering and event plumbing
//! around [`app::App`].

pub mod app;
pub mod cards;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod names;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod thumbnail;

pub use runtime::run;
