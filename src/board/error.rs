use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board dimensions {width}x{height}, both must be at least 1 and the board may hold at most {max_cells} cells")]
    InvalidDimensions {
        width: usize,
        height: usize,
        max_cells: usize,
    },
    #[error("Cell index {index} is outside of the board (0..{cell_count})")]
    IndexOutOfRange { index: usize, cell_count: usize },
    #[error("Cannot place a stone on cell {index}, it is already occupied")]
    CellOccupied { index: usize },
    #[error("Cannot place a stone on cell {index}, the cell below it is empty")]
    FloatingStone { index: usize },
    #[error("Cannot remove a stone from cell {index}, the cell is empty")]
    CellEmpty { index: usize },
    #[error("Cannot remove the stone on cell {index}, another stone rests on top of it")]
    StoneAbove { index: usize },
    #[error("Invalid position string: {0}")]
    InvalidPosition(String),
    #[error("Red has {red} stones and blue has {blue}, red moves first so red must have as many as blue or one more")]
    InvalidStoneCounts { red: usize, blue: usize },
}
