//! Game rules for tic-tac-toe.
//!
//! Pure functions classifying a board. Rules are kept apart from board
//! storage so the search and the controller share one definition of a win.

use crate::{Board, GameStatus, Player, Position, Square};

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Score of a machine win.
pub const WIN: i32 = 1;
/// Score of a human win.
pub const LOSS: i32 = -1;
/// Score of anything else.
pub const NEUTRAL: i32 = 0;

/// True iff `player` holds every square of some line.
pub fn wins(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Returns the player holding a line, preferring the machine.
///
/// Reachable boards never have two winners.
pub fn winner(board: &Board) -> Option<Player> {
    if wins(board, Player::Machine) {
        Some(Player::Machine)
    } else if wins(board, Player::Human) {
        Some(Player::Human)
    } else {
        None
    }
}

/// Static evaluation from the machine's point of view.
///
/// Returns [`WIN`] or [`LOSS`] for a decided board and [`NEUTRAL`] for both
/// draws and unfinished games; use [`Board::empty_cells`] to tell those
/// apart.
pub fn evaluate(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::Machine) => WIN,
        Some(Player::Human) => LOSS,
        None => NEUTRAL,
    }
}

/// True iff either player has won.
///
/// A full board without a line is not terminal here; the search relies on
/// its depth bound and on running out of empty cells instead.
pub fn is_terminal(board: &Board) -> bool {
    wins(board, Player::Human) || wins(board, Player::Machine)
}

/// Derives the game status from the board alone.
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(Player::Human) => GameStatus::HumanWin,
        Some(Player::Machine) => GameStatus::MachineWin,
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(evaluate(&board), NEUTRAL);
        assert!(!is_terminal(&board));
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut b = Board::new();
            for pos in line {
                b.set(pos, Square::Occupied(Player::Machine));
            }
            assert!(wins(&b, Player::Machine), "line {:?}", line);
            assert!(!wins(&b, Player::Human));
            assert_eq!(evaluate(&b), WIN);
        }
    }

    #[test]
    fn test_human_diagonal() {
        let b = board("OOX.X.X..");
        assert!(wins(&b, Player::Human));
        assert_eq!(evaluate(&b), LOSS);
        assert!(is_terminal(&b));
        assert_eq!(status(&b), GameStatus::HumanWin);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let b = board("XX.OO....");
        assert_eq!(winner(&b), None);
        assert!(!is_terminal(&b));
    }

    #[test]
    fn test_full_board_draw_not_terminal() {
        // X O X / X O O / O X X
        let b = board("XOXXOOOXX");
        assert!(b.is_full());
        assert!(!is_terminal(&b));
        assert_eq!(evaluate(&b), NEUTRAL);
        assert_eq!(status(&b), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X X X / O O X / X O O
        let b = board("XXXOOXXOO");
        assert_eq!(status(&b), GameStatus::HumanWin);
    }
}
