//! Keyed resource cache for the terminal front end.
//!
//! One map per asset kind, keyed by small integer ids: block tiles keyed by
//! piece color and text labels keyed by label id. Owned by the renderer and
//! passed where needed.

use std::collections::HashMap;

use crate::fb::{CellStyle, Rgb};

pub const LABEL_SCORE: u8 = 50;
pub const LABEL_NEXT_PIECE: u8 = 52;
pub const LABEL_NEW_GAME: u8 = 53;
pub const LABEL_PAUSE: u8 = 54;
pub const LABEL_GAME_OVER: u8 = 55;

/// Glyph and style drawn for one field cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub glyph: char,
    pub style: CellStyle,
}

/// Text drawn somewhere on screen; may span several lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub style: CellStyle,
}

impl Label {
    pub fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResourceCache {
    tiles: HashMap<u8, Tile>,
    labels: HashMap<u8, Label>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache with a tile for every piece color and the standard labels.
    pub fn with_defaults() -> Self {
        let mut cache = Self::new();
        let bg = Rgb::new(0, 0, 30);
        let colors = [
            Rgb::new(80, 220, 220),
            Rgb::new(220, 80, 80),
            Rgb::new(100, 220, 120),
            Rgb::new(200, 120, 220),
            Rgb::new(255, 165, 0),
            Rgb::new(80, 120, 220),
            Rgb::new(240, 220, 80),
        ];
        for (id, fg) in (1u8..).zip(colors) {
            cache.add_tile(
                id,
                Tile {
                    glyph: '█',
                    style: CellStyle::new(fg, bg),
                },
            );
        }

        let text = CellStyle::default();
        cache.add_label(LABEL_SCORE, Label::new("Score:", text));
        cache.add_label(LABEL_NEXT_PIECE, Label::new("Next", text));
        cache.add_label(
            LABEL_NEW_GAME,
            Label::new(
                "Press 'N' key\nto start new game",
                CellStyle::new(Rgb::new(240, 220, 80), bg).bold(),
            ),
        );
        cache.add_label(
            LABEL_PAUSE,
            Label::new(
                "Pause\nPress 'P' key\nto continue",
                CellStyle::new(Rgb::new(80, 120, 240), bg).bold(),
            ),
        );
        cache.add_label(
            LABEL_GAME_OVER,
            Label::new(
                "Game over.\nPress 'R' key to\nstart new game",
                CellStyle::new(Rgb::new(230, 60, 60), bg).bold(),
            ),
        );
        cache
    }

    /// Insert a tile unless `id` is taken; returns whichever tile `id` now holds.
    pub fn add_tile(&mut self, id: u8, tile: Tile) -> &Tile {
        self.tiles.entry(id).or_insert(tile)
    }

    pub fn tile(&self, id: u8) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Insert a label unless `id` is taken; returns whichever label `id` now holds.
    pub fn add_label(&mut self, id: u8, label: Label) -> &Label {
        self.labels.entry(id).or_insert(label)
    }

    pub fn label(&self, id: u8) -> Option<&Label> {
        self.labels.get(&id)
    }
}
