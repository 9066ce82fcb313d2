use log::{debug, info};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::color::Color;
use crate::board::{Board, NO_MOVE};
use crate::evaluate::{game_ending, GameEnding};
use crate::player::Player;

use super::renderer::GameRenderer;
use super::{GameError, GameOutcome};

pub struct Arena {
    board: Board,
    history: Vec<usize>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl Arena {
    /// Starts from `board`, which may already hold stones. The side to move is
    /// derived from the stone counts.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell indices played in this arena, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn last_move(&self) -> Option<usize> {
        self.history.last().copied()
    }

    /// Last move as a raw index, `NO_MOVE` before the first move.
    pub fn last_move_index(&self) -> usize {
        self.last_move().unwrap_or(NO_MOVE)
    }

    /// Plays until one color has four in a row or the board is full.
    ///
    /// A starting board whose stone counts cannot come from alternating play
    /// is rejected before any move. Every chosen index is validated against
    /// the canonical board before it is applied; an illegal move ends the
    /// game with an error instead of corrupting the board.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn play<R: GameRenderer>(
        &mut self,
        red: &mut dyn Player,
        blue: &mut dyn Player,
        renderer: &mut R,
    ) -> Result<GameOutcome, GameError> {
        self.board.check_stone_counts()?;
        info!(
            "starting {} vs {} on a {}x{} board",
            red.name(),
            blue.name(),
            self.board.width(),
            self.board.height()
        );

        loop {
            if let Some(ending) = game_ending(&self.board) {
                let outcome = match ending {
                    GameEnding::Win(color) => GameOutcome::Winner(color),
                    GameEnding::Draw => GameOutcome::Draw,
                };
                info!("{} after {} moves", outcome, self.history.len());
                renderer.render_outcome(&self.board, outcome);
                return Ok(outcome);
            }

            let current_turn = self.board.side_to_move();
            renderer.render_turn(&self.board, current_turn, self.last_move());

            let player: &mut dyn Player = match current_turn {
                Color::Red => &mut *red,
                Color::Blue => &mut *blue,
            };
            let index = player.choose_move(&self.board, current_turn)?;
            self.apply(index, current_turn)?;

            if let Some(delay) = renderer.frame_delay() {
                std::thread::sleep(delay);
            }
        }
    }

    fn apply(&mut self, index: usize, color: Color) -> Result<(), GameError> {
        if !self.board.is_legal_drop(index) {
            return Err(GameError::IllegalMove {
                color,
                index,
                position: self.board.to_position_string(),
            });
        }

        self.board.place(index, color)?;
        self.history.push(index);
        debug!("{} played {}", color, index);
        Ok(())
    }
}
