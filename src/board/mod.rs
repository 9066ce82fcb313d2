pub mod color;
pub mod error;

mod display;
mod position;


use color::Color;
use error::BoardError;

pub use position::EMPTY_SYMBOL;

/// Width of the reference board.
pub const DEFAULT_WIDTH: usize = 7;
/// Height of the reference board.
pub const DEFAULT_HEIGHT: usize = 4;
/// Upper bound on the number of cells, so that a full-board search depth fits a `u8`.
pub const MAX_CELLS: usize = u8::MAX as usize;
/// Reserved out-of-range index meaning "no prior move".
pub const NO_MOVE: usize = usize::MAX;

/// A single cell: `None` when empty, otherwise the color of the stone on it.
pub type Cell = Option<Color>;

/// Represents the state of a Connect Four board. Cells are stored row by row
/// starting from the bottom row, so index `i` sits on row `i / width` and
/// column `i % width`:
///
/// ```text
/// 21 22 23 24 25 26 27
/// 14 15 16 17 18 19 20
///  7  8  9 10 11 12 13
///  0  1  2  3  4  5  6
/// ```
///
/// Stones obey gravity: a cell above the bottom row may only be occupied when
/// the cell directly below it is occupied.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![None; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let cell_count = width.checked_mul(height).unwrap_or(usize::MAX);
        if width == 0 || height == 0 || cell_count > MAX_CELLS {
            return Err(BoardError::InvalidDimensions {
                width,
                height,
                max_cells: MAX_CELLS,
            });
        }

        Ok(Self {
            width,
            height,
            cells: vec![None; cell_count],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn index_of(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.height && column < self.width);
        row * self.width + column
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.width
    }

    pub fn column_of(&self, index: usize) -> usize {
        index % self.width
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    /// Returns true if a stone dropped into this cell's column would land on it.
    pub fn is_legal_drop(&self, index: usize) -> bool {
        index < self.cell_count()
            && self.is_empty(index)
            && (index < self.width || !self.is_empty(index - self.width))
    }

    pub fn place(&mut self, index: usize, color: Color) -> Result<(), BoardError> {
        self.check_index(index)?;
        if !self.is_empty(index) {
            return Err(BoardError::CellOccupied { index });
        }
        if index >= self.width && self.is_empty(index - self.width) {
            return Err(BoardError::FloatingStone { index });
        }

        self.cells[index] = Some(color);
        Ok(())
    }

    /// Takes back the stone on `index`. Only the topmost stone of a column can
    /// be removed, which keeps provisional placements in strict LIFO order.
    pub fn remove(&mut self, index: usize) -> Result<Color, BoardError> {
        self.check_index(index)?;
        let color = self.get(index).ok_or(BoardError::CellEmpty { index })?;
        let above = index + self.width;
        if above < self.cell_count() && !self.is_empty(above) {
            return Err(BoardError::StoneAbove { index });
        }

        self.cells[index] = None;
        Ok(color)
    }

    pub fn lowest_empty_in_column(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }

        (0..self.height)
            .map(|row| self.index_of(row, column))
            .find(|&index| self.is_empty(index))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub fn stone_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(color)).count()
    }

    /// Iterates over every occupied cell as `(index, color)`.
    pub fn stones(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|color| (index, color)))
    }

    /// Checks that the stone counts can come from alternating play with red
    /// moving first.
    pub fn check_stone_counts(&self) -> Result<(), BoardError> {
        let red = self.stone_count(Color::Red);
        let blue = self.stone_count(Color::Blue);
        if red == blue || red == blue + 1 {
            Ok(())
        } else {
            Err(BoardError::InvalidStoneCounts { red, blue })
        }
    }

    /// The color whose turn it is, assuming red moved first and the players alternated.
    pub fn side_to_move(&self) -> Color {
        if self.stone_count(Color::Red) > self.stone_count(Color::Blue) {
            Color::Blue
        } else {
            Color::Red
        }
    }

    fn check_index(&self, index: usize) -> Result<(), BoardError> {
        if index >= self.cell_count() {
            return Err(BoardError::IndexOutOfRange {
                index,
                cell_count: self.cell_count(),
            });
        }
        Ok(())
    }
}
