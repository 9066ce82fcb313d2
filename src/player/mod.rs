//! Players pick the next move for one color; the arena never asks how.

pub mod greedy;
pub mod human;
pub mod search_player;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::alpha_beta_searcher::SearchError;
use crate::board::color::Color;
use crate::board::Board;

pub use greedy::GreedyPlayer;
pub use human::{HumanPlayer, MoveInput};
pub use search_player::{EngineConfig, SearchPlayer};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("player quit the game")]
    UserExit,
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("search error: {error}")]
    SearchError {
        #[from]
        error: SearchError,
    },
    #[error("{0} has no legal move")]
    NoLegalMove(Color),
}

pub trait Player {
    fn name(&self) -> &str;

    /// Returns the cell index to drop `color`'s stone into. The board is the
    /// arena's; implementations that need to explore must work on a copy.
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<usize, PlayerError>;
}

/// Player implementations selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Greedy,
    AlphaBeta,
    Minimax,
}

impl PlayerKind {
    /// Builds a player of this kind; `config` supplies the search depth and
    /// flags for the search-based kinds.
    pub fn build(&self, config: EngineConfig) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::stdin()),
            PlayerKind::Greedy => Box::new(GreedyPlayer::default()),
            PlayerKind::AlphaBeta => Box::new(SearchPlayer::new(config)),
            PlayerKind::Minimax => Box::new(SearchPlayer::new(EngineConfig::minimax(
                config.search.depth,
            ))),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Greedy => "greedy",
            PlayerKind::AlphaBeta => "alpha-beta",
            PlayerKind::Minimax => "minimax",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PlayerKind {
    type Err = &'static str;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "human" => Ok(PlayerKind::Human),
            "greedy" => Ok(PlayerKind::Greedy),
            "alpha-beta" => Ok(PlayerKind::AlphaBeta),
            "minimax" => Ok(PlayerKind::Minimax),
            _ => Err("invalid player; options are: human, greedy, alpha-beta, minimax"),
        }
    }
}
