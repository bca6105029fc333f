//! History invariant: the recorded turns explain the board.

use super::Invariant;
use crate::{Game, Player};

/// Invariant: replaying the history onto the starting board reproduces the
/// current board.
///
/// Each turn must land on an empty square, and turns alternate starting
/// with the human.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut replayed = *game.start();
        let mut expected = Player::Human;

        for turn in game.history() {
            if turn.player != expected || !replayed.set_move(turn.position, turn.player) {
                return false;
            }
            expected = expected.opponent();
        }

        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}
