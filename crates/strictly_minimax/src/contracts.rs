//! Contract-based validation for human turns.
//!
//! A contract pairs a precondition on the state and the attempted move with
//! a postcondition relating the state before and after the whole turn.

use crate::error::MoveError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::{Game, Position, Square};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Contract for a human turn, including the machine's reply.
///
/// Preconditions:
/// - game is not over
/// - square is empty
///
/// Postconditions:
/// - marks are never removed or changed
/// - one or two squares were filled
/// - every [`GameInvariants`] member holds
pub struct TurnContract;

impl Contract<Game, Position> for TurnContract {
    #[instrument(skip(game))]
    fn pre(game: &Game, pos: &Position) -> Result<(), MoveError> {
        if game.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if !game.board().is_empty(*pos) {
            return Err(MoveError::SquareOccupied(*pos));
        }
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        let mut filled = 0;
        for pos in Position::ALL {
            match (before.board().get(pos), after.board().get(pos)) {
                (Square::Empty, Square::Occupied(_)) => filled += 1,
                (a, b) if a != b => {
                    warn!(?pos, "Occupied square changed during turn");
                    return Err(MoveError::InvariantViolation(format!(
                        "square {} was overwritten",
                        pos
                    )));
                }
                _ => {}
            }
        }
        if !(1..=2).contains(&filled) {
            warn!(filled, "Unexpected number of squares filled");
            return Err(MoveError::InvariantViolation(format!(
                "{} squares filled in one turn",
                filled
            )));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
