//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the engine, the terminal adapter and tests alike.
//!
//! # Playfield
//!
//! - **Width**: 10 columns by default (indexed 0-9)
//! - **Height**: 20 rows by default (indexed 0-19, row 0 is the top)
//! - **Cells**: `0` is empty, `1..=7` is a piece color
//!
//! # Timing Constants
//!
//! Timing values are in seconds, matching what the engine's `tick` consumes:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DROP_INTERVAL_SECS` | 0.3 | Gravity step interval |
//! | `SOFT_DROP_INTERVAL_SECS` | 0.01 | Gravity step interval while soft dropping |
//! | `DEFAULT_FRAME_RATE` | 60 | Adapter update/render cadence |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{GameAction, GamePhase, Point, DEFAULT_FIELD_WIDTH};
//!
//! let p = Point::new(3, -1);
//! assert_eq!(p.offset(1, 1), Point::new(4, 0));
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! assert_eq!(GamePhase::default(), GamePhase::MainMenu);
//! assert_eq!(DEFAULT_FIELD_WIDTH, 10);
//! ```

/// Default field width in cells (10 columns)
pub const DEFAULT_FIELD_WIDTH: usize = 10;

/// Default field height in cells (20 rows)
pub const DEFAULT_FIELD_HEIGHT: usize = 20;

/// Gravity interval in seconds (one row every 0.3s)
pub const DEFAULT_DROP_INTERVAL_SECS: f32 = 0.3;

/// Gravity interval in seconds while soft dropping
pub const SOFT_DROP_INTERVAL_SECS: f32 = 0.01;

/// Frames per second used by the adapter's update and render loops
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Row offset applied to freshly spawned pieces so they enter from above the field
pub const SPAWN_ROW_OFFSET: i32 = -3;

/// Number of distinct piece shapes
pub const SHAPE_COUNT: u8 = 7;

/// Number of piece colors (colors are `1..=COLOR_COUNT`)
pub const COLOR_COUNT: u8 = 7;

/// Shape id of the 2x2 square, which never rotates
pub const SQUARE_SHAPE: u8 = 6;

/// Number of cells in every piece
pub const PIECE_CELLS: usize = 4;

/// Score awarded per lock event, indexed by lines cleared in that event.
///
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 250 points
/// - 3 lines: 350 points
/// - 4 lines: 700 points
pub const LINE_SCORES: [u32; 5] = [0, 100, 250, 350, 700];

/// A cell on the field: `0` is empty, `1..=7` holds a piece color.
pub type Cell = u8;

/// Empty cell value
pub const EMPTY_CELL: Cell = 0;

/// Integer grid coordinate.
///
/// `x` grows to the right, `y` grows downwards. `y` may be negative while a
/// piece is still above the visible field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Game lifecycle phases
///
/// - **MainMenu**: Initial phase, waiting for a start intent
/// - **Playing**: Gravity runs and movement intents apply
/// - **Paused**: Frozen, toggled back to Playing by another pause intent
/// - **GameOver**: A piece locked above the visible field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::MainMenu => "main_menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }

    /// Whether the active piece is part of the picture in this phase
    pub fn shows_piece(&self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::Paused)
    }
}

/// Intents that the presentation layer can send to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° about its pivot cell
    Rotate,
    /// Switch gravity to the soft-drop interval until the next step
    SoftDrop,
    /// Leave the main menu
    Start,
    /// Toggle between Playing and Paused
    Pause,
    /// Start over from Playing or GameOver
    Reset,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("SOFTDROP"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "start" => Some(GameAction::Start),
            "pause" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
        }
    }
}
