use thiserror::Error;

use crate::alpha_beta_searcher::Evaluator;
use crate::board::color::Color;
use crate::board::Board;

pub mod evaluation_tables;

use self::evaluation_tables::{run_cells, weights_for};

/// Number of stones in a row needed to win.
pub const RUN_LENGTH: usize = 4;

// Weight totals are capped below the sentinel magnitude.
pub const LOSS_SCORE: i32 = -1_000_000;
pub const WIN_SCORE: i32 = -LOSS_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Win(Color),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    RisingDiagonal,
    FallingDiagonal,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::RisingDiagonal,
    Direction::FallingDiagonal,
];

impl Direction {
    /// (row step, column step) from one cell of a run to the next.
    pub fn steps(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::RisingDiagonal => (1, 1),
            Direction::FallingDiagonal => (1, -1),
        }
    }
}

/// Returns true if `color` has four stones in a row anywhere on the board.
#[inline(always)]
pub fn player_is_winning(board: &Board, color: Color) -> bool {
    let (width, height) = (board.width(), board.height());
    for row in 0..height {
        for column in 0..width {
            if board.get(board.index_of(row, column)) != Some(color) {
                continue;
            }
            for direction in ALL_DIRECTIONS.iter() {
                let run = match run_cells(width, height, row, column, *direction) {
                    Some(run) => run,
                    None => continue,
                };
                if run.iter().all(|&index| board.get(index) == Some(color)) {
                    return true;
                }
            }
        }
    }
    false
}

/// Returns the game ending state if the game has ended, otherwise returns None.
pub fn game_ending(board: &Board) -> Option<GameEnding> {
    for color in Color::ALL.iter() {
        if player_is_winning(board, *color) {
            return Some(GameEnding::Win(*color));
        }
    }

    if board.is_full() {
        return Some(GameEnding::Draw);
    }

    None
}

/// Sums the weights of `color`'s stones and subtracts the weights of the opponent's.
#[inline(always)]
pub fn score(board: &Board, color: Color, weights: &[i32]) -> i32 {
    debug_assert_eq!(weights.len(), board.cell_count());
    board
        .stones()
        .map(|(index, stone)| {
            if stone == color {
                weights[index]
            } else {
                -weights[index]
            }
        })
        .sum()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Expected {expected} weights, one per cell, but got {actual}")]
    WeightCountMismatch { expected: usize, actual: usize },
    #[error("Weight of cell {index} must be positive, got {weight}")]
    NonPositiveWeight { index: usize, weight: i32 },
    #[error("Weights sum to {total}, which does not stay below the loss score magnitude {limit}")]
    WeightsTooLarge { total: i64, limit: i32 },
}

/// Leaf evaluator scoring stones by a fixed per-cell weight table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionalEvaluator {
    width: usize,
    height: usize,
    weights: Vec<i32>,
}

impl PositionalEvaluator {
    /// Evaluator with the default table for a board of this size.
    pub fn for_board(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            weights: weights_for(board.width(), board.height()),
        }
    }

    pub fn with_weights(board: &Board, weights: Vec<i32>) -> Result<Self, EvaluationError> {
        if weights.len() != board.cell_count() {
            return Err(EvaluationError::WeightCountMismatch {
                expected: board.cell_count(),
                actual: weights.len(),
            });
        }
        if let Some((index, &weight)) = weights.iter().enumerate().find(|(_, &w)| w <= 0) {
            return Err(EvaluationError::NonPositiveWeight { index, weight });
        }
        let total: i64 = weights.iter().map(|&w| i64::from(w)).sum();
        if total >= i64::from(WIN_SCORE) {
            return Err(EvaluationError::WeightsTooLarge {
                total,
                limit: WIN_SCORE,
            });
        }

        Ok(Self {
            width: board.width(),
            height: board.height(),
            weights,
        })
    }

    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Largest absolute score this evaluator can produce.
    pub fn max_magnitude(&self) -> i32 {
        self.weights.iter().sum()
    }
}

impl Default for PositionalEvaluator {
    fn default() -> Self {
        Self::for_board(&Board::default())
    }
}

impl Evaluator for PositionalEvaluator {
    #[inline]
    fn evaluate(&self, board: &Board, color: Color) -> i32 {
        score(board, color, &self.weights)
    }

    fn supports(&self, board: &Board) -> bool {
        self.width == board.width() && self.height == board.height()
    }
}
