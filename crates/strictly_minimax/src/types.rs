//! Core domain types for tic-tac-toe against the machine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Player {
    /// The person at the keyboard (plays X, always moves first).
    Human,
    /// The minimax engine (plays O).
    Machine,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }

    /// Mark drawn for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Machine => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Machine => write!(f, "Machine"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used in the compact text form (`.` for empty).
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// Current status of the game, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The human completed a line.
    HumanWin,
    /// The machine completed a line.
    MachineWin,
    /// Board is full with no line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has concluded.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::HumanWin => Some(Player::Human),
            GameStatus::MachineWin => Some(Player::Machine),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::HumanWin => write!(f, "You win!"),
            GameStatus::MachineWin => write!(f, "Machine wins"),
            GameStatus::Draw => write!(f, "It's a draw"),
        }
    }
}
