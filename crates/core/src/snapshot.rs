use crate::types::{Cell, GamePhase, Point, EMPTY_CELL, PIECE_CELLS};

/// Owned copy of everything a renderer reads from the engine.
///
/// Taken under the engine lock, so it is never torn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major field cells (y * width + x)
    pub field: Vec<Cell>,
    pub current: [Point; PIECE_CELLS],
    pub current_shape: u8,
    pub color: u8,
    /// Next piece in its local template
    pub next: [Point; PIECE_CELLS],
    pub next_shape: u8,
    pub score: u32,
    pub lines: u32,
    pub phase: GamePhase,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width || y >= self.height {
            return EMPTY_CELL;
        }
        self.field[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.field[start..start + self.width]
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
