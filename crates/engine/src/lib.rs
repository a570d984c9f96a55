//! Engine runtime: the shared, lock-guarded game handle and the update thread.
//!
//! `tui-blockfall-core` is single-threaded and clock-free. This crate is what
//! lets an independently scheduled update loop, a renderer and an input loop
//! all drive the same engine.

pub mod shared;
pub mod ticker;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use shared::SharedGame;
pub use ticker::Ticker;
