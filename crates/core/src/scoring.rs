//! Scoring module
//!
//! One award per lock event, looked up by how many lines that lock cleared.
//! Lines are not scored individually and there is no level multiplier.

use crate::types::LINE_SCORES;

/// Points for a lock event that cleared `lines` rows.
///
/// More than four lines cannot come from a single lock on a field that was
/// scanned after every lock; hand-built fields that do it score as four.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}
