//! At most one player holds a line.

use super::Invariant;
use crate::rules::wins;
use crate::{Game, Player};

/// Invariant: both players never hold a winning line at once.
pub struct SingleWinnerInvariant;

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        !(wins(game.board(), Player::Human) && wins(game.board(), Player::Machine))
    }

    fn description() -> &'static str {
        "At most one player has a winning line"
    }
}
