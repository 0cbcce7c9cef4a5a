//! # shiritori-engine
//!
//! Chain-resolution engine for katakana shiritori ("word chain") played
//! against a sampled opponent over a closed creature-name vocabulary.
//!
//! ## Design Principles
//!
//! 1. **Values, not faults**: every gameplay failure (wrong starting
//!    character, unknown name, dead-end move) is an inspectable value
//!    returned from `Session::submit_move`. Nothing in the engine panics
//!    on user input.
//!
//! 2. **Explicit sessions**: all mutable state lives in a `Session` owned
//!    by the caller. The vocabulary index is built once, immutable, and
//!    shareable across any number of concurrent sessions.
//!
//! 3. **Deterministic sampling**: all randomness flows through a seeded
//!    `GameRng`, so tests (and replays) can pin a seed and assert the
//!    exact opponent reply.
//!
//! ## Modules
//!
//! - `kana`: linking-key derivation (long-vowel back-reference, exception
//!   table, small-kana folding) and character classification
//! - `vocab`: vocabulary entries, the read-only index, and the CSV loader
//! - `core`: deterministic RNG
//! - `game`: chain selector and the turn state machine

pub mod core;
pub mod game;
pub mod kana;
pub mod vocab;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState};

pub use crate::kana::{
    fold_small_kana, is_katakana, is_long_vowel_mark, is_small_kana, ChainRules, LONG_VOWEL_MARK,
    TERMINAL_SYLLABLE,
};

pub use crate::vocab::{load_csv, parse_csv, EntryId, VocabEntry, VocabError, VocabIndex};

pub use crate::game::{
    ChainSelector, GameError, GameStatus, Session, SessionSnapshot, TranscriptEntry, TurnOutcome,
};
