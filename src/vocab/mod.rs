//! Vocabulary: entries, the read-only index, and the CSV loader.
//!
//! ## Key Types
//!
//! - `EntryId`: numeric identifier for an entry (enrichment lookups)
//! - `VocabEntry`: immutable (name, id, optional classification) record
//! - `VocabIndex`: membership, id lookup, and prefix-grouped sampling
//! - `VocabError`: everything that can go wrong loading or building
//!
//! The entry set is loaded once at startup and never mutated; an index
//! can be shared read-only across any number of sessions.

pub mod entry;
pub mod index;
pub mod loader;

use std::io;

use thiserror::Error;

pub use entry::{EntryId, VocabEntry};
pub use index::VocabIndex;
pub use loader::{load_csv, parse_csv};

/// Errors from loading a vocabulary source or building the index.
///
/// These are load-time faults in the supplied data, distinct from the
/// gameplay outcomes in [`crate::game::GameError`].
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("duplicate name: {0}")]
    DuplicateName(String),

    #[error("empty name at line {0}")]
    EmptyName(usize),

    #[error("exception table names {0}, which is not in the vocabulary")]
    UnknownExceptionName(String),
}
