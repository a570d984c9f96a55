//! Field module - manages the playfield grid
//!
//! The field is a `width x height` grid where each cell is empty (`0`) or holds
//! a piece color (`1..=7`). Uses a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x grows to the right and y grows downwards; row 0
//! is the top of the visible field.

use arrayvec::ArrayVec;

use crate::types::{Cell, EMPTY_CELL};

/// Rows removed by a single [`Field::scan_lines`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedLines {
    /// Number of rows consumed.
    pub count: usize,
    /// Indices of the consumed rows (pre-clear numbering, bottom to top).
    ///
    /// A single lock touches at most four rows, so only the first four are kept.
    pub rows: ArrayVec<usize, 4>,
}

impl ClearedLines {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The playfield, row-major with flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    /// Flat array of cells (y * width + x)
    cells: Vec<Cell>,
}

impl Field {
    /// Create a new empty field.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0, "field width must be positive");
        assert!(height > 0, "field height must be positive");
        Self {
            width,
            height,
            cells: vec![EMPTY_CELL; width * height],
        }
    }

    /// Build a field from explicit rows (top row first).
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows have different lengths.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Self {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "all rows must have the same width"
        );
        let mut field = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            field.row_mut(y).copy_from_slice(row);
        }
        field
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY_CELL)
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height
    }

    /// Borrow one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Remove every full row below the top row and let the rest fall.
    ///
    /// Scans bottom to top with a write cursor. Row 0 is never counted as
    /// clearable, it only moves down like any other surviving row. Rows left
    /// above the cursor are emptied.
    pub fn scan_lines(&mut self) -> ClearedLines {
        let mut cleared = ClearedLines::default();
        let width = self.width;
        let mut write_y = self.height;

        for read_y in (0..self.height).rev() {
            if read_y > 0 && self.is_row_full(read_y) {
                cleared.count += 1;
                let _ = cleared.rows.try_push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(EMPTY_CELL);
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into nested rows (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }
}
