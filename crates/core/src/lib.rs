//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependencies on terminals, threads or clocks, which makes it:
//!
//! - **Deterministic**: Same seed produces the same piece and color sequence
//! - **Testable**: Every rule is reachable from plain unit tests
//! - **Portable**: Any adapter can drive it by feeding intents and elapsed time
//!
//! # Module Structure
//!
//! - [`field`]: The playfield grid and line clearing
//! - [`pieces`]: Shape table, spawn placement and rotation
//! - [`rng`]: Seeded LCG for shape and color draws
//! - [`scoring`]: Points per lock event
//! - [`game_state`]: The engine: spawning, collision, gravity, locking, phases
//! - [`snapshot`]: Owned read-only copy for renderers
//! - [`config`]: Tunable engine parameters and their validation
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameState, TickOutcome};
//! use tui_blockfall_types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(10, 20, 12345);
//! assert_eq!(game.phase(), GamePhase::MainMenu);
//!
//! game.apply_action(GameAction::Start);
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // Gravity fires once the accumulator exceeds the drop interval.
//! assert_eq!(game.tick(0.1), TickOutcome::Idle);
//! assert_eq!(game.tick(0.25), TickOutcome::Fell);
//! ```
//!
//! # Timing
//!
//! `tick` takes elapsed seconds supplied by the caller. The piece steps down
//! every 0.3s, or every 0.01s after a soft drop until the next step.

pub mod config;
pub mod field;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EngineConfig};
pub use field::{ClearedLines, Field};
pub use game_state::{GameState, LockEvent, TickOutcome};
pub use pieces::{rotate_points, spawn_points, template_points, SHAPES};
pub use rng::SimpleRng;
pub use scoring::line_clear_score;
pub use snapshot::GameSnapshot;
