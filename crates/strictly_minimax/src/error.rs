//! Error types for the game core.

use crate::{GameHandle, Position};

/// Error that can occur when validating or applying a human move.
///
/// The controller's silent entry point swallows these; they exist so a
/// shell can tell the player why nothing happened.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside 0..=2.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A board handed to [`crate::Game::from_board`] is not a position the
    /// human could be asked to move in.
    #[display("Invalid starting position: {}", _0)]
    InvalidPosition(#[error(not(source))] String),

    /// A postcondition failed after the turn was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Error parsing the compact board text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// Board text did not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// Character other than X, O or an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCharacter(#[error(not(source))] char),
}

/// Error raised by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// No game is registered under the handle.
    #[display("Unknown game {}", _0)]
    UnknownGame(#[error(not(source))] GameHandle),

    /// A thread panicked while holding the session lock.
    #[display("Session store lock poisoned")]
    Poisoned,
}
