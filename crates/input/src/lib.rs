//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Which of
//! those actions apply is decided by the engine, not here.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
