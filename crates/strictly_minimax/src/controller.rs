//! Turn orchestration for a human-versus-machine game.
//!
//! A human move is the only input. When it leaves the game open the
//! machine answers within the same call, so between calls the game is
//! either waiting for the human or over.

use crate::contracts::{Contract, TurnContract};
use crate::error::MoveError;
use crate::{Board, Engine, GameStatus, Player, Position, Turn, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Where the turn cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a square.
    AwaitingHumanMove,
    /// The machine is searching. Never observed between calls.
    AwaitingMachineMove,
    /// Someone won or the board is full.
    GameOver,
}

/// A single game: board, history and the machine opponent.
///
/// Status and phase are recomputed from the board on every query.
#[derive(Debug, Clone)]
pub struct Game {
    start: Board,
    board: Board,
    history: Vec<Turn>,
    engine: Engine,
}

impl Game {
    /// Creates a new game with an entropy-seeded engine.
    #[instrument]
    pub fn new() -> Self {
        Self::with_engine(Engine::new())
    }

    /// Creates a new game using `engine` for the machine.
    #[instrument(skip(engine))]
    pub fn with_engine(engine: Engine) -> Self {
        Self {
            start: Board::new(),
            board: Board::new(),
            history: Vec::new(),
            engine,
        }
    }

    /// Resumes play from `board` with the human to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidPosition`] unless both sides have the
    /// same number of marks and the human holds no line.
    #[instrument(skip(board, engine), fields(board = %board.to_compact()))]
    pub fn from_board(board: Board, engine: Engine) -> Result<Self, MoveError> {
        let human = board.count(Player::Human);
        let machine = board.count(Player::Machine);
        if human != machine {
            warn!(human, machine, "Rejected unbalanced starting board");
            return Err(MoveError::InvalidPosition(format!(
                "human has {} marks and machine has {}; they must be equal with the human to move",
                human, machine
            )));
        }
        if rules::wins(&board, Player::Human) {
            warn!("Rejected starting board already won by the human");
            return Err(MoveError::InvalidPosition(
                "human cannot already hold a line with the human to move".to_string(),
            ));
        }

        Ok(Self {
            start: board,
            board,
            history: Vec::new(),
            engine,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board the current game started from.
    pub fn start(&self) -> &Board {
        &self.start
    }

    /// Returns the turns played since the start.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        if self.status().is_over() {
            Phase::GameOver
        } else {
            Phase::AwaitingHumanMove
        }
    }

    /// Plays a human move and, if the game goes on, the machine's reply.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`], [`MoveError::GameOver`] or
    /// [`MoveError::SquareOccupied`] without changing anything when the move
    /// is rejected.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the committed turn breaks the turn
    /// postconditions. Both marks are already on the board by then, so this
    /// is never reported as a rejected move.
    #[instrument(skip(self), fields(board = %self.board.to_compact()))]
    pub fn try_human_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        TurnContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.commit(pos, Player::Human);

        let status = match self.status() {
            GameStatus::InProgress => {
                self.machine_turn();
                self.status()
            }
            decided => decided,
        };

        #[cfg(debug_assertions)]
        if let Err(e) = TurnContract::post(&before, self) {
            error!(error = %e, board = %self.board.to_compact(), "Turn broke game invariants");
            panic!("turn broke game invariants: {}", e);
        }

        info!(
            position = %pos,
            ?status,
            board = %self.board.to_compact(),
            "Turn complete"
        );
        Ok(status)
    }

    /// Plays a human move, ignoring rejected moves.
    ///
    /// Returns the status after the turn, which is the unchanged status
    /// when the move was rejected.
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> GameStatus {
        match self.try_human_move(row, col) {
            Ok(status) => status,
            Err(e) => {
                debug!(row, col, error = %e, "Ignoring human move");
                self.status()
            }
        }
    }

    /// Clears the board for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.start = Board::new();
        self.board = Board::new();
        self.history.clear();
        info!("Game reset");
    }

    fn machine_turn(&mut self) {
        debug!(phase = ?Phase::AwaitingMachineMove, "Machine to move");
        match self.engine.choose_move(&self.board) {
            Some(pos) => {
                let placed = self.commit(pos, Player::Machine);
                debug_assert!(placed, "engine chose occupied square {}", pos);
            }
            None => warn!("Machine has no legal move"),
        }
    }

    fn commit(&mut self, pos: Position, player: Player) -> bool {
        if !self.board.set_move(pos, player) {
            return false;
        }
        self.history.push(Turn::new(player, pos));
        debug!(%player, position = %pos, "Placed mark");
        true
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::with_engine(Engine::seeded(42))
    }

    #[test]
    fn test_new_game_awaits_human() {
        let game = game();
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_machine_replies_in_same_call() {
        let mut game = game();
        let status = game.apply_human_move(0, 0);
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.board().empty_count(), 7);
        assert_eq!(game.history()[1].player, Player::Machine);
    }

    #[test]
    fn test_rejections_report_reason() {
        let mut game = game();
        assert_eq!(
            game.try_human_move(3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        game.apply_human_move(0, 0);
        assert_eq!(
            game.try_human_move(0, 0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_from_board_rejects_unbalanced() {
        let board = "XX.O.....".parse().unwrap();
        assert!(matches!(
            Game::from_board(board, Engine::seeded(0)),
            Err(MoveError::InvalidPosition(_))
        ));
    }

    #[test]
    fn test_human_fills_last_square_draw() {
        // X O X / X O O / O X .
        let board = "XOXXOOOX.".parse().unwrap();
        let mut game = Game::from_board(board, Engine::seeded(0)).unwrap();
        assert_eq!(game.apply_human_move(2, 2), GameStatus::Draw);
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.history().len(), 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "turn broke game invariants")]
    fn test_broken_turn_panics_instead_of_ignoring() {
        let mut game = game();
        game.apply_human_move(0, 0);
        // Two extra human marks: the bottom row completes on the next move
        // while the balance is already off.
        game.board_mut().set_move(Position::BottomLeft, Player::Human);
        game.board_mut().set_move(Position::BottomRight, Player::Human);
        game.apply_human_move(2, 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = game();
        game.apply_human_move(1, 1);
        game.reset();
        assert_eq!(*game.board(), Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
    }
}
