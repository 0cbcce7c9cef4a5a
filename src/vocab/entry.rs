//! Vocabulary entries - static name records.
//!
//! A `VocabEntry` is one row of the creature-name dictionary: the
//! full-width katakana name, its numeric identifier, and optional
//! classification metadata. Entries are immutable once loaded.

use serde::{Deserialize, Serialize};

/// Numeric identifier of a vocabulary entry.
///
/// Used only for presentation enrichment (e.g. image lookup by id);
/// the engine itself keys everything on names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl EntryId {
    /// Create a new entry ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entry({})", self.0)
    }
}

/// One immutable record of the creature-name dictionary.
///
/// ## Example
///
/// ```
/// use shiritori_engine::{EntryId, VocabEntry};
///
/// let entry = VocabEntry::new(EntryId::new(25), "ピカチュウ")
///     .with_classification("ねずみポケモン");
///
/// assert_eq!(entry.name, "ピカチュウ");
/// assert_eq!(entry.id, EntryId::new(25));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// Numeric identifier from the data source.
    pub id: EntryId,

    /// Full-width katakana name; equality is exact string equality.
    pub name: String,

    /// Optional classification metadata (opaque to the engine).
    pub classification: Option<String>,
}

impl VocabEntry {
    /// Create a new entry without classification metadata.
    #[must_use]
    pub fn new(id: EntryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            classification: None,
        }
    }

    /// Attach classification metadata.
    #[must_use]
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }

    /// First character of the name; `None` only for a malformed empty
    /// name, which the loader rejects before an entry reaches the index.
    #[must_use]
    pub fn first_char(&self) -> Option<char> {
        self.name.chars().next()
    }
}
