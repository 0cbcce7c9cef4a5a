//! Statuses, turn outcomes, transcript records, and the rejection
//! taxonomy.
//!
//! Every gameplay failure is an expected, user-facing value. The
//! presentation layer renders the message; it never mutates engine
//! state itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle of one game session.
///
/// `NotStarted → InProgress → {PlayerWon, OpponentWon, Conceded,
/// Exhausted}`; the four outcomes are terminal until an explicit reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No game running; `start` is the only valid transition.
    NotStarted,
    /// A game is running; the player owes a move.
    InProgress,
    /// The opponent was forced into a dead-end name.
    PlayerWon,
    /// The player submitted a dead-end name.
    OpponentWon,
    /// The player gave up mid-game. Scoring is left to the caller.
    Conceded,
    /// No legal reply remained; a player victory by forfeiture.
    Exhausted,
}

impl GameStatus {
    /// Whether this status ends the session.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::NotStarted | GameStatus::InProgress)
    }

    /// Whether the session ended in the player's favor.
    ///
    /// Exhaustion counts: when the opponent has no legal reply it
    /// forfeits.
    #[must_use]
    pub fn is_player_victory(self) -> bool {
        matches!(self, GameStatus::PlayerWon | GameStatus::Exhausted)
    }
}

/// What an accepted move led to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The opponent replied; the player must move again.
    Reply(String),
    /// The opponent's only draw ended in the terminal syllable - its
    /// forced losing move. The session is now `PlayerWon`.
    OpponentDeadEnd(String),
    /// No legal reply existed. The session is now `Exhausted`.
    VocabularyExhausted,
}

/// One completed exchange: the opponent's name and the player's answer
/// to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// The name the player had to chain from.
    pub opponent: String,
    /// The player's accepted reply.
    pub player: String,
}

/// Rejections and protocol violations, returned as values from the
/// session - never thrown, never fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Empty candidate string; rejected before any rule runs.
    #[error("enter a name")]
    EmptyInput,

    /// The candidate does not begin with the required linking key.
    #[error("the name must start with {expected}")]
    WrongStartingCharacter {
        /// The linking key derived from the current name.
        expected: char,
    },

    /// The candidate is not in the vocabulary.
    #[error("that name is not in the vocabulary")]
    UnknownName,

    /// The candidate was already played this session, by either side.
    #[error("that name was already used")]
    AlreadyUsed,

    /// The candidate ends in the terminal syllable. The session ends as
    /// a loss for the player; no other state changes.
    #[error("the name ends in the terminal syllable - game over")]
    DeadEndMove,

    /// `start` found no legal opening name.
    #[error("no playable name left in the vocabulary")]
    VocabularyExhausted,

    /// `start` called while a game is already running or finished.
    #[error("a game is already in progress")]
    AlreadyStarted,

    /// A move or concession arrived outside `InProgress`.
    #[error("no game in progress")]
    NotInProgress,
}
