//! Game state module - the game engine
//!
//! Ties the field, shape table, RNG and scoring together. Owns the active and
//! next pieces, the gravity accumulator, the score and the game phase.
//!
//! Every mutating operation is all-or-nothing: the active cells are copied
//! before a move or rotation and restored if the result collides.

use crate::pieces::{is_rotatable, rotate_points, spawn_points, template_points};
use crate::types::*;
use crate::{
    line_clear_score, ClearedLines, ConfigError, EngineConfig, Field, GameSnapshot, SimpleRng,
};

/// What a piece lock did to the field and score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockEvent {
    pub cleared: ClearedLines,
    pub score_delta: u32,
}

impl LockEvent {
    pub fn lines_cleared(&self) -> usize {
        self.cleared.count
    }
}

/// Result of one [`GameState::tick`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing, or the accumulator has not reached the drop interval
    Idle,
    /// The piece moved down one row
    Fell,
    /// The piece locked into the field and the next piece spawned
    Locked(LockEvent),
    /// The piece locked while part of it was still above the field
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    field: Field,
    /// Active piece cells in field coordinates
    current: [Point; PIECE_CELLS],
    current_shape: u8,
    color: u8,
    /// Next piece cells in its local template
    next: [Point; PIECE_CELLS],
    next_shape: u8,
    /// Whether the first shape pair has been drawn
    spawned: bool,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    phase: GamePhase,
    /// Seconds since the last forced downward step
    elapsed: f32,
    drop_interval: f32,
    normal_interval: f32,
    soft_drop_interval: f32,
}

impl GameState {
    /// Create an engine in the main menu with a first piece pair already drawn.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero. Use [`GameState::from_config`]
    /// for a checked constructor.
    pub fn new(width: usize, height: usize, seed: u32) -> Self {
        Self::with_intervals(
            width,
            height,
            seed,
            DEFAULT_DROP_INTERVAL_SECS,
            SOFT_DROP_INTERVAL_SECS,
        )
    }

    /// Validate `config` and build an engine from it.
    ///
    /// A missing seed falls back to 0.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_intervals(
            config.field_width,
            config.field_height,
            config.seed.unwrap_or_default(),
            config.drop_interval_secs,
            config.soft_drop_interval_secs,
        ))
    }

    fn with_intervals(
        width: usize,
        height: usize,
        seed: u32,
        normal_interval: f32,
        soft_drop_interval: f32,
    ) -> Self {
        let mut state = Self {
            field: Field::new(width, height),
            current: [Point::default(); PIECE_CELLS],
            current_shape: 0,
            color: 1,
            next: [Point::default(); PIECE_CELLS],
            next_shape: 0,
            spawned: false,
            rng: SimpleRng::new(seed),
            score: 0,
            lines: 0,
            phase: GamePhase::MainMenu,
            elapsed: 0.0,
            drop_interval: normal_interval,
            normal_interval,
            soft_drop_interval,
        };
        state.spawn_next_piece();
        state
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_width(&self) -> usize {
        self.field.width()
    }

    pub fn field_height(&self) -> usize {
        self.field.height()
    }

    /// Active piece cells in field coordinates
    pub fn current_piece(&self) -> &[Point; PIECE_CELLS] {
        &self.current
    }

    /// Next piece cells in its local template
    pub fn next_piece(&self) -> &[Point; PIECE_CELLS] {
        &self.next
    }

    pub fn current_shape(&self) -> u8 {
        self.current_shape
    }

    pub fn next_shape(&self) -> u8 {
        self.next_shape
    }

    pub fn piece_color(&self) -> u8 {
        self.color
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Current gravity interval in seconds (shortened while soft dropping)
    pub fn drop_interval(&self) -> f32 {
        self.drop_interval
    }

    /// Place the active piece directly, bypassing collision.
    ///
    /// Test and bench scaffolding for building exact lock scenarios.
    #[doc(hidden)]
    pub fn set_current_piece(&mut self, shape: u8, color: u8, cells: [Point; PIECE_CELLS]) {
        self.current_shape = shape;
        self.color = color;
        self.current = cells;
    }

    /// Mutable field access for test and bench scaffolding.
    #[doc(hidden)]
    pub fn field_for_setup(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.field.width();
        out.height = self.field.height();
        out.field.clear();
        out.field.extend_from_slice(self.field.cells());
        out.current = self.current;
        out.current_shape = self.current_shape;
        out.color = self.color;
        out.next = self.next;
        out.next_shape = self.next_shape;
        out.score = self.score;
        out.lines = self.lines;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// The very first call draws both shapes. The active piece is centered
    /// horizontally and starts above the field.
    pub fn spawn_next_piece(&mut self) {
        if self.spawned {
            self.current_shape = self.next_shape;
            self.next_shape = self.rng.draw_shape();
        } else {
            self.next_shape = self.rng.draw_shape();
            self.current_shape = self.rng.draw_shape();
            self.spawned = true;
        }

        self.color = self.rng.draw_color();
        self.current = spawn_points(self.current_shape, self.field.width());
        self.next = template_points(self.next_shape);

        log::debug!(
            "spawned shape {} (color {}), next shape {}",
            self.current_shape,
            self.color,
            self.next_shape
        );
    }

    /// Whether the active piece overlaps a wall, the floor or a filled cell.
    ///
    /// Cells above the field (y < 0) are only checked against the side walls.
    pub fn is_collided(&self) -> bool {
        let width = self.field.width() as i32;
        let height = self.field.height() as i32;
        self.current.iter().any(|p| {
            p.x < 0
                || p.x >= width
                || p.y >= height
                || (p.y >= 0 && self.field.is_occupied(p.x, p.y))
        })
    }

    /// Apply `transform` to the active cells, undoing it on collision.
    fn try_transform(
        &mut self,
        transform: impl FnOnce(&[Point; PIECE_CELLS]) -> [Point; PIECE_CELLS],
    ) -> bool {
        let backup = self.current;
        self.current = transform(&backup);
        if self.is_collided() {
            self.current = backup;
            return false;
        }
        true
    }

    /// Shift the active piece horizontally. Returns false (and leaves the
    /// piece untouched) if the target collides or the game is not running.
    pub fn move_piece(&mut self, dx: i32) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.try_transform(|cells| cells.map(|p| p.offset(dx, 0)))
    }

    /// Rotate the active piece 90° about its second cell.
    ///
    /// The square never rotates.
    pub fn rotate(&mut self) -> bool {
        if self.phase != GamePhase::Playing || !is_rotatable(self.current_shape) {
            return false;
        }
        self.try_transform(rotate_points)
    }

    /// Soft drop: shorten the gravity interval until the next step.
    ///
    /// Only applies while playing, so a soft drop cannot be requested during
    /// a pause and carried over into the resumed game.
    pub fn drop(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.drop_interval = self.soft_drop_interval;
        true
    }

    /// Advance gravity by `dt` seconds.
    ///
    /// Does nothing unless playing. Once the accumulator exceeds the drop
    /// interval the piece moves down one row or, if it cannot, locks.
    pub fn tick(&mut self, dt: f32) -> TickOutcome {
        if self.phase != GamePhase::Playing {
            return TickOutcome::Idle;
        }

        self.elapsed += dt;
        if self.elapsed <= self.drop_interval {
            return TickOutcome::Idle;
        }

        let outcome = if self.try_transform(|cells| cells.map(|p| p.offset(0, 1))) {
            TickOutcome::Fell
        } else {
            self.lock_piece()
        };

        self.elapsed = 0.0;
        self.drop_interval = self.normal_interval;
        outcome
    }

    /// Write the active piece into the field, then spawn and clear lines.
    fn lock_piece(&mut self) -> TickOutcome {
        for p in self.current {
            if p.y < 0 {
                self.phase = GamePhase::GameOver;
            } else {
                self.field.set(p.x, p.y, self.color);
            }
        }

        if self.phase == GamePhase::GameOver {
            log::info!("game over with score {}", self.score);
            return TickOutcome::GameOver;
        }

        self.spawn_next_piece();
        let cleared = self.field.scan_lines();
        let score_delta = line_clear_score(cleared.count);
        self.score += score_delta;
        self.lines += cleared.count as u32;

        log::debug!(
            "piece locked: {} line(s), +{} (score {})",
            cleared.count,
            score_delta,
            self.score
        );

        TickOutcome::Locked(LockEvent {
            cleared,
            score_delta,
        })
    }

    /// Leave the main menu. No-op in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::MainMenu {
            return false;
        }
        self.phase = GamePhase::Playing;
        log::info!("game started (seed {})", self.rng.seed());
        true
    }

    /// Toggle between Playing and Paused. No-op in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            _ => return false,
        };
        log::info!("{}", if self.phase == GamePhase::Paused { "paused" } else { "resumed" });
        true
    }

    /// Start a new game from Playing or GameOver. No-op in any other phase.
    pub fn reset(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Playing | GamePhase::GameOver) {
            return false;
        }
        self.field.clear();
        self.spawn_next_piece();
        self.score = 0;
        self.lines = 0;
        self.elapsed = 0.0;
        self.drop_interval = self.normal_interval;
        self.phase = GamePhase::Playing;
        log::info!("game reset");
        true
    }

    /// Apply a game action. Returns whether it had any effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.drop(),
            GameAction::Start => self.start(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Reset => self.reset(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT, 1)
    }
}
