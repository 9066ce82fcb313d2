//! Text notation for board positions.
//!
//! A position is written row by row starting from the bottom row. Each row
//! holds one character per column (`.` empty, `X` red, `O` blue) and is
//! terminated by `-`, e.g. the reference board after red opened in the middle
//! column and blue answered on top of it:
//!
//! ```text
//! ...X...-...O...-.......-.......-
//! ```

use std::str::FromStr;

use super::color::Color;
use super::error::BoardError;
use super::Board;

pub const EMPTY_SYMBOL: char = '.';
const ROW_SEPARATOR: char = '-';

impl Board {
    pub fn to_position_string(&self) -> String {
        let mut notation = String::with_capacity(self.cell_count() + self.height());
        for row in 0..self.height() {
            for column in 0..self.width() {
                let symbol = self
                    .get(self.index_of(row, column))
                    .map_or(EMPTY_SYMBOL, |color| color.symbol());
                notation.push(symbol);
            }
            notation.push(ROW_SEPARATOR);
        }
        notation
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let notation = notation.trim();
        let notation = notation.strip_suffix(ROW_SEPARATOR).unwrap_or(notation);
        let rows: Vec<&str> = notation.split(ROW_SEPARATOR).map(str::trim).collect();

        let width = rows[0].chars().count();
        if width == 0 {
            return Err(BoardError::InvalidPosition(
                "position must contain at least one non-empty row".to_string(),
            ));
        }
        if let Some(ragged) = rows.iter().find(|row| row.chars().count() != width) {
            return Err(BoardError::InvalidPosition(format!(
                "row `{}` does not have {} columns",
                ragged, width
            )));
        }

        let mut board = Board::new(width, rows.len())?;
        let symbols = rows.iter().flat_map(|row| row.chars());
        for (index, symbol) in symbols.enumerate() {
            if symbol == EMPTY_SYMBOL {
                continue;
            }
            let color = Color::from_symbol(symbol).ok_or_else(|| {
                BoardError::InvalidPosition(format!("unknown cell symbol `{}`", symbol))
            })?;
            // Rows arrive bottom-up, so a floating stone is caught by `place`.
            board.place(index, color)?;
        }

        Ok(board)
    }
}

/// Builds a board from rows given top row first, the way it looks on screen.
///
/// ```ignore
/// let board = board_position![
///     ".......",
///     ".......",
///     "...O...",
///     "..XX...",
/// ];
/// ```
#[macro_export]
macro_rules! board_position {
    ($($row:expr),+ $(,)?) => {{
        let rows: Vec<&str> = vec![$($row),+];
        let notation: String = rows.iter().rev().map(|row| format!("{}-", row)).collect();
        notation
            .parse::<$crate::board::Board>()
            .expect("invalid board position")
    }};
}
