//! Seams of the search.

use crate::board::color::Color;
use crate::board::Board;

/// Scores a position that the search does not look beyond.
pub trait Evaluator: Clone + Send + Sync {
    /// Evaluates `board` from `color`'s point of view: higher is better for `color`.
    ///
    /// Implementations must stay strictly inside `(LOSS_SCORE, WIN_SCORE)` so
    /// that a decided game always outranks a positional advantage.
    fn evaluate(&self, board: &Board, color: Color) -> i32;

    /// Whether this evaluator can score boards shaped like `board`.
    fn supports(&self, _board: &Board) -> bool {
        true
    }
}
