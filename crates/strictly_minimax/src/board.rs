//! The 3x3 board and its query operations.

use crate::error::BoardParseError;
use crate::{Player, Position, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites a square without checks. Search and replay only.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Squares as three rows, for rendering.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let s = &self.squares;
        [[s[0], s[1], s[2]], [s[3], s[4], s[5]], [s[6], s[7], s[8]]]
    }

    /// All empty positions in row-major order.
    ///
    /// The order is load-bearing: it fixes minimax tie-breaking and the
    /// candidate list for the randomized opening.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Places `player`'s mark if the square is empty.
    ///
    /// Returns false and leaves the board untouched when the square is
    /// already taken.
    #[instrument(level = "trace", skip(self))]
    pub fn set_move(&mut self, pos: Position, player: Player) -> bool {
        if !self.is_empty(pos) {
            trace!(?pos, "Square already occupied");
            return false;
        }
        self.set(pos, Square::Occupied(player));
        true
    }

    /// Returns a copy of the board with `player`'s mark at `pos`.
    ///
    /// Callers must pass an empty square; the search only feeds it
    /// positions from [`Board::empty_cells`].
    pub fn with_move(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Compact row-major text form, e.g. `XX.OO....`.
    pub fn to_compact(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses the compact form: nine of `X`, `O` and `.` (or `_`/space for
    /// empty), ignoring `/` and `|` row separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !matches!(c, '/' | '|' | '\n')) {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::Human),
                'O' | 'o' => Square::Occupied(Player::Machine),
                '.' | '_' | ' ' | '-' => Square::Empty,
                other => return Err(BoardParseError::InvalidCharacter(other)),
            };
            if let Some(pos) = Position::from_index(count) {
                board.set(pos, square);
            }
            count += 1;
        }
        if count != 9 {
            return Err(BoardParseError::WrongLength(count));
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    /// Renders the 3x3 grid with blanks for empty squares.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|square| match square {
                    Square::Empty => " ".to_string(),
                    Square::Occupied(p) => p.symbol().to_string(),
                })
                .collect();
            write!(f, " {} ", cells.join(" | "))?;
            if r < 2 {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "X...O...X".parse().unwrap();
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 6);
        assert_eq!(empty[0], Position::TopCenter);
        assert_eq!(empty[5], Position::BottomCenter);
        assert!(empty.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_set_move_rejects_occupied() {
        let mut board = Board::new();
        assert!(board.set_move(Position::Center, Player::Human));
        let before = board;
        assert!(!board.set_move(Position::Center, Player::Machine));
        assert_eq!(board, before);
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::Human));
    }

    #[test]
    fn test_with_move_leaves_original() {
        let board = Board::new();
        let next = board.with_move(Position::TopLeft, Player::Machine);
        assert!(board.is_empty(Position::TopLeft));
        assert_eq!(next.count(Player::Machine), 1);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX.OO...".parse::<Board>(),
            Err(BoardParseError::WrongLength(8))
        );
        assert_eq!(
            "XX.OO...Z".parse::<Board>(),
            Err(BoardParseError::InvalidCharacter('Z'))
        );
    }

    #[test]
    fn test_parse_accepts_row_separators() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.to_compact(), "XX.OO....");
        assert_eq!(board.count(Player::Human), 2);
        assert_eq!(board.count(Player::Machine), 2);
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X........".parse().unwrap();
        let text = board.to_string();
        assert!(text.starts_with(" X |   |   "));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_serde_shape() {
        let board: Board = "X...O....".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        let schema = serde_json::to_string(&schemars::schema_for!(Board)).unwrap();
        assert!(schema.contains("squares"));
    }
}
