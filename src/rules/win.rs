//! Win condition checking
//!
//! Five or more stones in a row along any axis wins. Overlines count,
//! there are no opening restrictions.

use crate::board::{Board, Pos, Stone};

use super::line::{run_cells, scan_run, AXES};

/// Stones in a row needed to win
pub const WIN_LENGTH: u32 = 5;

/// Winner through the stone just played at `pos`, if any.
///
/// Walks both ways from `pos` along each axis; the first axis whose run
/// reaches five decides. An empty `pos` never wins.
pub fn check_winner(board: &Board, pos: Pos) -> Option<Stone> {
    let player = board.get(pos);
    if player == Stone::Empty {
        return None;
    }
    AXES.iter()
        .any(|&axis| scan_run(board, pos, axis, player).length() >= WIN_LENGTH)
        .then_some(player)
}

/// The full winning run through `pos` (five or more cells), if any.
pub fn find_five_line_at_pos(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let player = board.get(pos);
    if player == Stone::Empty {
        return None;
    }
    AXES.iter()
        .map(|&axis| scan_run(board, pos, axis, player))
        .find(|run| run.length() >= WIN_LENGTH)
        .map(|run| run_cells(pos, &run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(7, 3 + i), Stone::Black);
        }
        assert_eq!(check_winner(&board, Pos::new(7, 5)), Some(Stone::Black));
        assert_eq!(check_winner(&board, Pos::new(7, 3)), Some(Stone::Black));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(2 + i, 4), Stone::White);
        }
        assert_eq!(check_winner(&board, Pos::new(6, 4)), Some(Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(3 + i, 3 + i), Stone::Black);
        }
        assert_eq!(check_winner(&board, Pos::new(5, 5)), Some(Stone::Black));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::new();
        // Diagonal from (4, 8) to (8, 4)
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::White);
        }
        assert_eq!(check_winner(&board, Pos::new(8, 4)), Some(Stone::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(10, 2 + i), Stone::Black);
        }
        assert_eq!(check_winner(&board, Pos::new(10, 4)), Some(Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(7, 3 + i), Stone::Black);
        }
        assert_eq!(check_winner(&board, Pos::new(7, 6)), None);
    }

    #[test]
    fn test_gap_is_not_five() {
        // X X . X X X
        let mut board = Board::new();
        place_all(&mut board, &[(7, 1), (7, 2), (7, 4), (7, 5), (7, 6)], Stone::Black);
        assert_eq!(check_winner(&board, Pos::new(7, 4)), None);
    }

    #[test]
    fn test_opponent_stone_breaks_line() {
        // X X O X X
        let mut board = Board::new();
        place_all(&mut board, &[(2, 2), (3, 3), (5, 5), (6, 6)], Stone::White);
        board.place_stone(Pos::new(4, 4), Stone::Black);
        assert_eq!(check_winner(&board, Pos::new(3, 3)), None);
        assert_eq!(check_winner(&board, Pos::new(4, 4)), None);
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(14, i), Stone::Black);
        }
        assert_eq!(check_winner(&board, Pos::new(14, 0)), Some(Stone::Black));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        // Diagonal from (10, 10) to (14, 14)
        for i in 0..5 {
            board.place_stone(Pos::new(10 + i, 10 + i), Stone::White);
        }
        assert_eq!(check_winner(&board, Pos::new(14, 14)), Some(Stone::White));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(0, i), Stone::Black);
        }
        assert_eq!(check_winner(&board, Pos::new(0, 4)), None);
    }

    #[test]
    fn test_winning_line_cells() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(i, 9), Stone::Black);
        }
        let line = find_five_line_at_pos(&board, Pos::new(2, 9)).unwrap();
        assert_eq!(line.len(), 6);
        assert_eq!(line.first(), Some(&Pos::new(0, 9)));
        assert_eq!(line.last(), Some(&Pos::new(5, 9)));
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board, Pos::center()), None);
        assert!(find_five_line_at_pos(&board, Pos::center()).is_none());
    }

    /// Rotate a cell 90° clockwise about the board center
    fn rotate(pos: Pos) -> Pos {
        let n = BOARD_SIZE as u8 - 1;
        Pos::new(pos.col, n - pos.row)
    }

    /// Mirror a cell left-right
    fn reflect(pos: Pos) -> Pos {
        let n = BOARD_SIZE as u8 - 1;
        Pos::new(pos.row, n - pos.col)
    }

    #[test]
    fn test_win_detection_symmetric_under_rotation_and_reflection() {
        let lines: [&[(u8, u8)]; 4] = [
            &[(2, 3), (2, 4), (2, 5), (2, 6), (2, 7)],
            &[(9, 1), (10, 1), (11, 1), (12, 1), (13, 1)],
            &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)],
            &[(5, 12), (6, 11), (7, 10), (8, 9), (9, 8)],
        ];
        let transforms: [fn(Pos) -> Pos; 4] = [
            rotate,
            |p| rotate(rotate(p)),
            |p| rotate(rotate(rotate(p))),
            reflect,
        ];
        for cells in lines {
            let placed = Pos::new(cells[2].0, cells[2].1);
            for transform in transforms {
                let mut board = Board::new();
                for &(r, c) in cells {
                    board.place_stone(transform(Pos::new(r, c)), Stone::Black);
                }
                assert_eq!(
                    check_winner(&board, transform(placed)),
                    Some(Stone::Black),
                    "{cells:?}"
                );
            }
        }
    }
}
