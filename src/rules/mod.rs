//! Win and draw detection
//!
//! Win condition: any of the 3 rows, 3 columns, or 2 diagonals fully
//! occupied by one player's mark. Exactly 8 lines are checked. A full board
//! with no winning line is a draw; win takes priority when both coincide,
//! so callers must check wins for both players before consulting
//! [`is_draw`].

use crate::board::{Board, Mark, Pos};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
/// Positions as (col, row).
pub const WINNING_LINES: [[(u8, u8); 3]; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Check if the given player occupies a full line
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

/// Find the winning line for the given player, if any
///
/// Returns the first fully occupied line in [`WINNING_LINES`] order. Used
/// by the renderer to highlight the line at game end.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Pos; 3]> {
    if !mark.is_player() {
        return None;
    }

    for line in WINNING_LINES {
        let positions = line.map(|(col, row)| Pos::new(col, row));
        if positions.iter().all(|&pos| board.get(pos) == mark) {
            return Some(positions);
        }
    }
    None
}

/// True iff no empty cell remains.
///
/// Only meaningful after win checks; a board that is both full and winning
/// is a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GRID_SIZE;

    /// Fill the given line with `mark`
    fn fill_line(board: &mut Board, line: [(u8, u8); 3], mark: Mark) {
        for (col, row) in line {
            board.place_mark(Pos::new(col, row), mark);
        }
    }

    #[test]
    fn every_winning_line_wins_for_both_players() {
        for mark in [Mark::X, Mark::O] {
            for line in WINNING_LINES {
                let mut board = Board::new();
                fill_line(&mut board, line, mark);
                assert!(is_winner(&board, mark), "{mark} should win line {line:?}");
                assert!(!is_winner(&board, mark.opponent()));
            }
        }
    }

    #[test]
    fn winning_line_returns_the_filled_triple() {
        let mut board = Board::new();
        fill_line(&mut board, [(0, 0), (1, 0), (2, 0)], Mark::X);

        let line = winning_line(&board, Mark::X).unwrap();
        assert_eq!(line, [Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)]);
        assert!(winning_line(&board, Mark::O).is_none());
    }

    #[test]
    fn winning_line_survives_opponent_noise() {
        // Top row for X, scattered non-winning O marks elsewhere
        let mut board = Board::new();
        fill_line(&mut board, [(0, 0), (1, 0), (2, 0)], Mark::X);
        board.place_mark(Pos::new(0, 1), Mark::O);
        board.place_mark(Pos::new(2, 2), Mark::O);

        assert!(is_winner(&board, Mark::X));
        assert!(!is_winner(&board, Mark::O));
    }

    #[test]
    fn two_in_a_line_is_not_a_win() {
        let mut board = Board::new();
        board.place_mark(Pos::new(0, 0), Mark::X);
        board.place_mark(Pos::new(1, 0), Mark::X);
        assert!(!is_winner(&board, Mark::X));
    }

    #[test]
    fn empty_board_has_no_winner_and_no_draw() {
        let board = Board::new();
        assert!(!is_winner(&board, Mark::X));
        assert!(!is_winner(&board, Mark::O));
        assert!(winning_line(&board, Mark::Empty).is_none());
        assert!(!is_draw(&board));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // X O X
        // O X O
        // O X O
        let layout = [
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::O],
            [Mark::O, Mark::X, Mark::O],
        ];
        let mut board = Board::new();
        for (row, marks) in layout.iter().enumerate() {
            for (col, &mark) in marks.iter().enumerate() {
                board.place_mark(Pos::new(col as u8, row as u8), mark);
            }
        }

        assert!(is_draw(&board));
        assert!(!is_winner(&board, Mark::X));
        assert!(!is_winner(&board, Mark::O));
    }

    #[test]
    fn full_winning_board_is_a_win_not_a_draw() {
        // X X X
        // O O X
        // X O O
        let layout = [
            [Mark::X, Mark::X, Mark::X],
            [Mark::O, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
        ];
        let mut board = Board::new();
        for (row, marks) in layout.iter().enumerate() {
            for (col, &mark) in marks.iter().enumerate() {
                board.place_mark(Pos::new(col as u8, row as u8), mark);
            }
        }

        // Both full and winning: win takes priority
        assert!(is_winner(&board, Mark::X));
        assert!(is_draw(&board));
    }

    #[test]
    fn line_table_covers_every_cell() {
        let mut seen = [[false; GRID_SIZE]; GRID_SIZE];
        for line in WINNING_LINES {
            for (col, row) in line {
                seen[row as usize][col as usize] = true;
            }
        }
        assert!(seen.iter().flatten().all(|&cell| cell));
    }
}
