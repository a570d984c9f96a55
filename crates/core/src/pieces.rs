//! Pieces module - shape table and rotation
//!
//! Every shape is four offsets into a 2-column by 4-row template. Offset `o`
//! maps to column `o % 2` and row `o / 2`:
//!
//! ```text
//!  0 1
//!  2 3
//!  4 5
//!  6 7
//! ```
//!
//! Rotation is a plain 90° turn about the piece's second cell; there are no
//! wall kicks.

use crate::types::{Point, PIECE_CELLS, SHAPE_COUNT, SPAWN_ROW_OFFSET, SQUARE_SHAPE};

/// Template offsets for the seven shapes, indexed by shape id.
pub const SHAPES: [[u8; PIECE_CELLS]; SHAPE_COUNT as usize] = [
    [1, 3, 5, 7], // I
    [2, 4, 5, 7], // Z
    [3, 5, 4, 6], // S
    [3, 5, 4, 7], // T
    [2, 3, 5, 7], // L
    [3, 5, 7, 6], // J
    [2, 3, 4, 5], // O
];

/// Index of the cell every rotation pivots around
pub const PIVOT_INDEX: usize = 1;

/// Convert a template offset into a local cell position
#[inline]
pub fn template_cell(offset: u8) -> Point {
    Point::new(i32::from(offset % 2), i32::from(offset / 2))
}

/// Local template cells for a shape (used for the next-piece preview).
///
/// # Panics
///
/// Panics if `shape >= SHAPE_COUNT`.
pub fn template_points(shape: u8) -> [Point; PIECE_CELLS] {
    SHAPES[usize::from(shape)].map(template_cell)
}

/// Absolute spawn cells for a shape on a field `field_width` columns wide.
///
/// Centered horizontally at `field_width / 2` and lifted above the field so
/// the piece falls into view.
pub fn spawn_points(shape: u8, field_width: usize) -> [Point; PIECE_CELLS] {
    let dx = (field_width / 2) as i32;
    template_points(shape).map(|p| p.offset(dx, SPAWN_ROW_OFFSET))
}

/// Rotate cells 90° about the pivot cell: (dx, dy) -> (-dy, dx).
pub fn rotate_points(points: &[Point; PIECE_CELLS]) -> [Point; PIECE_CELLS] {
    let pivot = points[PIVOT_INDEX];
    points.map(|p| Point::new(pivot.x - (p.y - pivot.y), pivot.y + (p.x - pivot.x)))
}

/// Whether a shape changes under rotation
pub fn is_rotatable(shape: u8) -> bool {
    shape != SQUARE_SHAPE
}
