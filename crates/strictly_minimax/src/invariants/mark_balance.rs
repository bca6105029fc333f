//! Mark balance invariant: the human is never behind, never two ahead.

use super::Invariant;
use crate::{Game, Player};

/// Invariant: human marks minus machine marks is 0 or 1.
///
/// The human always moves first and the machine answers every
/// non-final human move.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let human = board.count(Player::Human);
        let machine = board.count(Player::Machine);
        human == machine || human == machine + 1
    }

    fn description() -> &'static str {
        "Human marks exceed machine marks by 0 or 1"
    }
}
