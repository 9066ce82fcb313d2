//! The arena: owns the board, alternates turns between two players and
//! declares the result.

pub mod arena;
pub mod renderer;


use std::fmt;

use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::player::PlayerError;

pub use arena::Arena;
pub use renderer::{ConsoleRenderer, GameRenderer, SilentRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Color),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(color) => write!(f, "{} ({}) wins", color, color.symbol()),
            GameOutcome::Draw => write!(f, "the game is a draw"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{color} played {index}, which is not a legal move in {position}")]
    IllegalMove {
        color: Color,
        index: usize,
        position: String,
    },
    #[error("player error: {0}")]
    Player(#[from] PlayerError),
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}
