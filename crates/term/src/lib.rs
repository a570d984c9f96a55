//! Terminal front end for the falling-block game.
//!
//! Renders a `GameSnapshot` into a plain framebuffer and flushes that to the
//! terminal with crossterm. Nothing here touches game state; the renderer only
//! ever sees snapshots.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod resources;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use resources::{Label, ResourceCache, Tile};
