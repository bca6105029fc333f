//! Strictly Minimax - tic-tac-toe against an exhaustive minimax opponent
//!
//! The human plays X and always moves first; the machine plays O and
//! answers every move with an optimal reply found by searching the whole
//! remaining game tree.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Square`]s with query operations
//! - **Rules**: pure win/draw classification and static evaluation
//! - **Search**: [`minimax`] and the machine player, [`Engine`]
//! - **Controller**: [`Game`] runs a human turn plus the machine's reply
//! - **Sessions**: [`SessionManager`] keeps isolated games behind handles
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Engine, Game, GameStatus, Position};
//!
//! let mut game = Game::with_engine(Engine::seeded(1));
//! let status = game.apply_human_move(0, 0);
//! assert_eq!(status, GameStatus::InProgress);
//! assert!(!game.board().is_empty(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contracts;
mod controller;
mod error;
mod position;
mod search;
mod session;
mod turn;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use board::Board;
pub use position::{Move, Position};
pub use turn::Turn;
pub use types::{GameStatus, Player, Square};

// Crate-level exports - Evaluation and search
pub use rules::{evaluate, is_terminal, wins};
pub use search::{Engine, SearchResult, minimax};

// Crate-level exports - Turn orchestration
pub use contracts::{Contract, TurnContract};
pub use controller::{Game, Phase};

// Crate-level exports - Sessions
pub use session::{GameHandle, SessionManager};

// Crate-level exports - Errors
pub use error::{BoardParseError, MoveError, SessionError};
