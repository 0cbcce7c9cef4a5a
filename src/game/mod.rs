//! Game layer: chain selection and the turn state machine.
//!
//! ## Key Types
//!
//! - `Session`: one game, owned by the caller; `start` / `submit_move` /
//!   `concede` / `reset` drive it to a terminal `GameStatus`
//! - `ChainSelector`: picks the opponent's reply for a previous name
//! - `TurnOutcome`: what an accepted move led to
//! - `GameError`: the rejection taxonomy, returned as values
//!
//! The opponent is a constrained random sampler, not a second player:
//! its moves are always drawn from the valid vocabulary, so it can only
//! lose by being forced into a dead-end name or running out of replies.

pub mod outcome;
pub mod selector;
pub mod session;

pub use outcome::{GameError, GameStatus, TranscriptEntry, TurnOutcome};
pub use selector::ChainSelector;
pub use session::{Session, SessionSnapshot};
