use crate::board::color::Color;
use crate::board::Board;

use super::{Player, PlayerError};

/// Drops into the leftmost column that still has room.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlayer;

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> Result<usize, PlayerError> {
        (0..board.width())
            .find_map(|column| board.lowest_empty_in_column(column))
            .ok_or(PlayerError::NoLegalMove(color))
    }
}
