use std::time::Duration;

use termion::color::{self, Fg};

use crate::board::color::Color;
use crate::board::{Board, EMPTY_SYMBOL};

use super::GameOutcome;

pub trait GameRenderer {
    fn render_turn(&mut self, board: &Board, current_turn: Color, last_move: Option<usize>);
    fn render_outcome(&mut self, board: &Board, outcome: GameOutcome);
    fn frame_delay(&self) -> Option<Duration>;
}

/// Draws `board` like its `Display` output, with red and blue stones and the
/// playable indices in color.
pub fn colored_board(board: &Board) -> String {
    let cell_width = board.cell_count().saturating_sub(1).to_string().len() + 1;
    let mut buffer = String::new();
    for row in (0..board.height()).rev() {
        let mut line = String::new();
        for column in 0..board.width() {
            let index = board.index_of(row, column);
            let (label, fg) = match board.get(index) {
                Some(stone) => {
                    let fg = match stone {
                        Color::Red => Fg(color::Red).to_string(),
                        Color::Blue => Fg(color::Blue).to_string(),
                    };
                    (stone.symbol().to_string(), Some(fg))
                }
                None if board.is_legal_drop(index) => {
                    (index.to_string(), Some(Fg(color::LightBlack).to_string()))
                }
                None => (EMPTY_SYMBOL.to_string(), None),
            };
            // pad before coloring so escape codes do not count toward the width
            let padded = format!("{:<width$}", label, width = cell_width);
            match fg {
                Some(fg) => {
                    let trimmed = padded.trim_end();
                    let padding = &padded[trimmed.len()..];
                    line.push_str(&format!("{}{}{}{}", fg, trimmed, Fg(color::Reset), padding));
                }
                None => line.push_str(&padded),
            }
        }
        buffer.push_str(line.trim_end());
        buffer.push('\n');
    }
    buffer
}

/// Prints the board to stdout before every turn.
pub struct ConsoleRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl ConsoleRenderer {
    pub fn new(delay_between_moves: Option<Duration>) -> Self {
        Self {
            delay_between_moves,
        }
    }
}

impl GameRenderer for ConsoleRenderer {
    fn render_turn(&mut self, board: &Board, current_turn: Color, last_move: Option<usize>) {
        println!();
        println!("{}", colored_board(board));
        if let Some(index) = last_move {
            let color = current_turn.opposite();
            println!(
                "* Last move: {} dropped into column {} (cell {})",
                color,
                board.column_of(index),
                index
            );
        }
        println!("* Turn: {} ({})", current_turn, current_turn.symbol());
    }

    fn render_outcome(&mut self, board: &Board, outcome: GameOutcome) {
        println!();
        println!("{}", colored_board(board));
        println!("{}", outcome);
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

/// Renders nothing. Used for headless games such as benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentRenderer;

impl GameRenderer for SilentRenderer {
    fn render_turn(&mut self, _board: &Board, _current_turn: Color, _last_move: Option<usize>) {}

    fn render_outcome(&mut self, _board: &Board, _outcome: GameOutcome) {}

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
