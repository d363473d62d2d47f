//! Win detection over the eight fixed lines.

use crate::board::{Board, Cell, Mark};

/// A winning line: three cell indices.
pub type Line = [usize; 3];

/// The eight fixed lines, in evaluation order.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Checks if the given mark has completed any line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| line_complete(board, line, mark))
}

/// Returns the first completed line for the mark, in [`LINES`] order.
///
/// Used for highlighting; at most one mark can hold a completed line
/// in a legal game, so the tie-break order does not affect outcomes.
pub fn winning_line(board: &Board, mark: Mark) -> Option<Line> {
    LINES
        .into_iter()
        .find(|line| line_complete(board, line, mark))
}

fn line_complete(board: &Board, line: &Line, mark: Mark) -> bool {
    line.iter()
        .all(|&index| board.cells()[index] == Cell::Occupied(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_line_empty_board() {
        let board = Board::new();
        assert!(!has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
        assert_eq!(winning_line(&board, Mark::X), None);
    }

    #[test]
    fn test_every_line_detected_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for line in LINES {
                let mut board = Board::new();
                for index in line {
                    board.place(index, mark).unwrap();
                }
                assert!(has_line(&board, mark), "{mark} line {line:?} missed");
                assert_eq!(winning_line(&board, mark), Some(line));
                assert!(!has_line(&board, mark.opponent()));
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_line() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::X).unwrap();
        assert!(!has_line(&board, Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::O).unwrap();
        board.place(2, Mark::X).unwrap();
        assert!(!has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
    }

    #[test]
    fn test_winning_line_enumeration_order() {
        // Row 0 and column 0 both complete; row 0 comes first in LINES.
        let mut board = Board::new();
        for index in [0, 1, 2, 3, 6] {
            board.place(index, Mark::X).unwrap();
        }
        assert_eq!(winning_line(&board, Mark::X), Some([0, 1, 2]));
    }
}
