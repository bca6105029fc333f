//! Exhaustive minimax search for the machine's reply.
//!
//! The tree is small enough (at most 9! leaves) that the search runs
//! without pruning or transposition tables. Every recursive call works on
//! its own copy of the board, so the caller's board is never touched.

use crate::rules::{evaluate, is_terminal};
use crate::{Board, Player, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Best move found for a board and the score it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Chosen move; `None` at a leaf (depth exhausted, game decided, or no
    /// empty square left).
    pub best: Option<Position>,
    /// Score from the machine's point of view: -1, 0 or +1.
    pub score: i32,
}

/// Minimax over every legal continuation.
///
/// The machine maximizes and the human minimizes. Only a strictly better
/// score replaces the current candidate, so among equal moves the first in
/// row-major order wins.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn minimax(board: &Board, depth: usize, player: Player) -> SearchResult {
    let mut nodes = 0u64;
    let result = search(board, depth, player, &mut nodes);
    debug!(nodes, best = ?result.best, score = result.score, "Search complete");
    result
}

fn search(board: &Board, depth: usize, player: Player, nodes: &mut u64) -> SearchResult {
    *nodes += 1;

    if depth == 0 || is_terminal(board) {
        return SearchResult {
            best: None,
            score: evaluate(board),
        };
    }

    let mut best: Option<SearchResult> = None;
    for pos in board.empty_cells() {
        let child = board.with_move(pos, player);
        let score = search(&child, depth - 1, player.opponent(), nodes).score;

        let improves = match (best, player) {
            (None, _) => true,
            (Some(b), Player::Machine) => score > b.score,
            (Some(b), Player::Human) => score < b.score,
        };
        if improves {
            best = Some(SearchResult {
                best: Some(pos),
                score,
            });
        }
    }

    // No empty squares: a drawn full board scores like a leaf.
    best.unwrap_or(SearchResult {
        best: None,
        score: evaluate(board),
    })
}

/// The machine player: minimax plus a randomized opening.
///
/// On a completely empty board the search is skipped and a uniformly random
/// square is chosen, which keeps machine-first games from always opening
/// the same way.
#[derive(Debug, Clone)]
pub struct Engine {
    rng: StdRng,
}

impl Engine {
    /// Engine seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Engine with a reproducible opening choice.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Engine seeded when `seed` is set, from entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    /// Picks the machine's move, or `None` if no square is empty.
    #[instrument(skip(self, board), fields(board = %board.to_compact()))]
    pub fn choose_move(&mut self, board: &Board) -> Option<Position> {
        let empty = board.empty_cells();
        let depth = empty.len();

        if depth == 9 {
            let pos = empty.choose(&mut self.rng).copied();
            debug!(?pos, "Random opening move");
            return pos;
        }

        minimax(board, depth, Player::Machine).best
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
