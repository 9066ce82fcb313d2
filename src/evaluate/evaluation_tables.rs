use crate::board::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

use super::{Direction, ALL_DIRECTIONS, RUN_LENGTH};

/// Positional weights of the 7x4 board, bottom row first. Center columns are
/// worth the most since they take part in the most four-in-a-row lines.
#[rustfmt::skip]
pub const REFERENCE_WEIGHTS: [i32; DEFAULT_WIDTH * DEFAULT_HEIGHT] = [
    3, 4, 6, 7, 6, 4, 3,
    2, 4, 6, 7, 6, 4, 2,
    2, 4, 6, 7, 6, 4, 2,
    3, 4, 6, 7, 6, 4, 3,
];

/// Returns the weight table for a board of the given size: the reference
/// table for 7x4, otherwise the number of four-cell lines passing through
/// each cell (at least 1).
pub fn weights_for(width: usize, height: usize) -> Vec<i32> {
    if width == DEFAULT_WIDTH && height == DEFAULT_HEIGHT {
        return REFERENCE_WEIGHTS.to_vec();
    }

    let mut weights = vec![0; width * height];
    for row in 0..height {
        for column in 0..width {
            for direction in ALL_DIRECTIONS.iter() {
                if let Some(cells) = run_cells(width, height, row, column, *direction) {
                    for index in cells.iter() {
                        weights[*index] += 1;
                    }
                }
            }
        }
    }

    weights.iter().map(|&weight| weight.max(1)).collect()
}

/// Indices of the run of `RUN_LENGTH` cells starting at (row, column) and
/// heading in `direction`, or `None` if it leaves the board.
pub(crate) fn run_cells(
    width: usize,
    height: usize,
    row: usize,
    column: usize,
    direction: Direction,
) -> Option<[usize; RUN_LENGTH]> {
    let (row_step, column_step) = direction.steps();
    let span = (RUN_LENGTH - 1) as isize;
    let last_row = row as isize + row_step * span;
    let last_column = column as isize + column_step * span;
    if last_row < 0 || last_row >= height as isize {
        return None;
    }
    if last_column < 0 || last_column >= width as isize {
        return None;
    }

    let mut cells = [0; RUN_LENGTH];
    for (offset, cell) in cells.iter_mut().enumerate() {
        let r = row as isize + row_step * offset as isize;
        let c = column as isize + column_step * offset as isize;
        *cell = (r as usize) * width + c as usize;
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_board_uses_reference_table() {
        assert_eq!(weights_for(7, 4), REFERENCE_WEIGHTS.to_vec());
    }

    #[test]
    fn test_classic_board_counts_lines_through_each_cell() {
        let weights = weights_for(7, 6);
        #[rustfmt::skip]
        let expected = vec![
            3, 4, 5, 7, 5, 4, 3,
            4, 6, 8, 10, 8, 6, 4,
            5, 8, 11, 13, 11, 8, 5,
            5, 8, 11, 13, 11, 8, 5,
            4, 6, 8, 10, 8, 6, 4,
            3, 4, 5, 7, 5, 4, 3,
        ];
        assert_eq!(weights, expected);
    }

    #[test]
    fn test_tiny_board_weights_are_positive() {
        let weights = weights_for(3, 3);
        assert_eq!(weights, vec![1; 9]);
    }

    #[test]
    fn test_run_cells_bounds() {
        assert_eq!(
            run_cells(7, 4, 0, 0, Direction::Horizontal),
            Some([0, 1, 2, 3])
        );
        assert_eq!(run_cells(7, 4, 0, 4, Direction::Horizontal), None);
        assert_eq!(
            run_cells(7, 4, 0, 6, Direction::Vertical),
            Some([6, 13, 20, 27])
        );
        assert_eq!(run_cells(7, 4, 1, 0, Direction::Vertical), None);
        assert_eq!(
            run_cells(7, 4, 0, 3, Direction::FallingDiagonal),
            Some([3, 9, 15, 21])
        );
        assert_eq!(run_cells(7, 4, 0, 2, Direction::FallingDiagonal), None);
    }
}
