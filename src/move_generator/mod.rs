use smallvec::SmallVec;
use std::str::FromStr;

use crate::board::Board;

/// Legal moves of one position. Inline capacity covers boards up to 16 columns.
pub type MoveList = SmallVec<[usize; 16]>;

/// The order in which columns are visited. The order never changes which
/// score the search finds, but it decides how early alpha-beta cuts off and
/// which of several equally good moves is picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Middle column first, then alternating left and right outward.
    CenterFirst,
    LeftToRight,
}

impl Default for MoveOrdering {
    fn default() -> Self {
        MoveOrdering::CenterFirst
    }
}

impl FromStr for MoveOrdering {
    type Err = &'static str;

    fn from_str(ordering: &str) -> Result<Self, Self::Err> {
        match ordering {
            "center-first" => Ok(MoveOrdering::CenterFirst),
            "left-to-right" => Ok(MoveOrdering::LeftToRight),
            _ => Err("invalid move ordering; options are: center-first, left-to-right"),
        }
    }
}

/// Returns the columns of a board of the given width in center-first order,
/// e.g. `3 2 4 1 5 0 6` for the 7-wide board.
pub fn center_first_columns(width: usize) -> Vec<usize> {
    if width == 0 {
        return Vec::new();
    }

    let center = (width - 1) / 2;
    let mut columns = Vec::with_capacity(width);
    columns.push(center);
    for distance in 1..width {
        if distance <= center {
            columns.push(center - distance);
        }
        if center + distance < width {
            columns.push(center + distance);
        }
    }
    columns
}

#[derive(Clone, Debug, Default)]
pub struct MoveGenerator {
    ordering: MoveOrdering,
    columns: Vec<usize>,
}

impl MoveGenerator {
    pub fn new(ordering: MoveOrdering) -> Self {
        Self {
            ordering,
            columns: Vec::new(),
        }
    }

    pub fn ordering(&self) -> MoveOrdering {
        self.ordering
    }

    /// Generates the lowest empty cell of every column that is not full, in
    /// this generator's column order.
    pub fn generate_moves(&self, board: &Board) -> MoveList {
        let mut moves = MoveList::new();
        if self.columns.len() == board.width() {
            self.collect_moves(board, self.columns.iter().copied(), &mut moves);
        } else {
            match self.ordering {
                MoveOrdering::CenterFirst => self.collect_moves(
                    board,
                    center_first_columns(board.width()).into_iter(),
                    &mut moves,
                ),
                MoveOrdering::LeftToRight => {
                    self.collect_moves(board, 0..board.width(), &mut moves)
                }
            }
        }
        moves
    }

    /// Caches the column order for boards of `board`'s width so that
    /// `generate_moves` does not rebuild it on every node.
    pub fn prepare(&mut self, board: &Board) {
        self.columns = match self.ordering {
            MoveOrdering::CenterFirst => center_first_columns(board.width()),
            MoveOrdering::LeftToRight => (0..board.width()).collect(),
        };
    }

    fn collect_moves<I>(&self, board: &Board, columns: I, moves: &mut MoveList)
    where
        I: Iterator<Item = usize>,
    {
        for column in columns {
            if let Some(index) = board.lowest_empty_in_column(column) {
                debug_assert!(board.is_legal_drop(index));
                moves.push(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::board_position;

    #[test]
    fn test_center_first_columns() {
        assert_eq!(center_first_columns(7), vec![3, 2, 4, 1, 5, 0, 6]);
        assert_eq!(center_first_columns(6), vec![2, 1, 3, 0, 4, 5]);
        assert_eq!(center_first_columns(4), vec![1, 0, 2, 3]);
        assert_eq!(center_first_columns(1), vec![0]);
        assert!(center_first_columns(0).is_empty());
    }

    #[test]
    fn test_empty_board_moves_are_bottom_row() {
        let board = Board::default();
        let generator = MoveGenerator::default();
        assert_eq!(generator.generate_moves(&board).as_slice(), &[3, 2, 4, 1, 5, 0, 6]);

        let generator = MoveGenerator::new(MoveOrdering::LeftToRight);
        assert_eq!(generator.generate_moves(&board).as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_moves_skip_full_columns() {
        let board = board_position![
            "...X...",
            "...O...",
            "X..X...",
            "O.XO...",
        ];
        let generator = MoveGenerator::default();
        assert_eq!(generator.generate_moves(&board).as_slice(), &[9, 4, 1, 5, 14, 6]);
    }

    #[test]
    fn test_prepared_generator_matches_unprepared() {
        let board = board_position![
            ".......",
            ".......",
            "..XO...",
            "O.XOX.X",
        ];
        let generator = MoveGenerator::default();
        let mut prepared = MoveGenerator::default();
        prepared.prepare(&board);
        assert_eq!(generator.generate_moves(&board), prepared.generate_moves(&board));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = board_position![
            "OXOXOXO",
            "OXOXOXO",
            "XOXOXOX",
            "XOXOXOX",
        ];
        assert!(MoveGenerator::default().generate_moves(&board).is_empty());
    }

    #[test]
    fn test_moves_are_lowest_empty_cell_per_column() {
        let mut board = Board::default();
        let generator = MoveGenerator::default();
        // play a few stones and check the invariant after each one
        for (turn, column) in [3, 3, 2, 4, 3, 0, 6, 3].iter().enumerate() {
            let color = if turn % 2 == 0 { Color::Red } else { Color::Blue };
            let index = board.lowest_empty_in_column(*column).unwrap();
            board.place(index, color).unwrap();

            let moves = generator.generate_moves(&board);
            let mut columns: Vec<usize> = moves.iter().map(|&m| board.column_of(m)).collect();
            columns.sort_unstable();
            columns.dedup();
            assert_eq!(columns.len(), moves.len());
            for &m in moves.iter() {
                assert!(board.is_empty(m));
                assert_eq!(board.lowest_empty_in_column(board.column_of(m)), Some(m));
            }
            let open_columns = (0..board.width())
                .filter(|&c| board.lowest_empty_in_column(c).is_some())
                .count();
            assert_eq!(moves.len(), open_columns);
        }
    }

    #[test]
    fn test_parse_move_ordering() {
        assert_eq!("center-first".parse::<MoveOrdering>(), Ok(MoveOrdering::CenterFirst));
        assert_eq!("left-to-right".parse::<MoveOrdering>(), Ok(MoveOrdering::LeftToRight));
        assert!("random".parse::<MoveOrdering>().is_err());
    }
}
