//! Read-only vocabulary index.
//!
//! Built once from loaded entries plus the chain rules, then shared by
//! any number of sessions. Provides membership and id lookup, and the
//! two sampling operations the engine needs: successor sampling within
//! a first-character bucket, and opening-move sampling over names that
//! do not end in the terminal syllable.
//!
//! Both samplers return `None` on an empty candidate set; exhaustion is
//! a normal outcome, not an error.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;

use crate::core::GameRng;
use crate::kana::ChainRules;

use super::entry::{EntryId, VocabEntry};
use super::VocabError;

/// Indexed vocabulary: entries, lookup maps, and first-character
/// buckets for prefix-grouped sampling.
///
/// ## Example
///
/// ```
/// use shiritori_engine::{ChainRules, EntryId, VocabEntry, VocabIndex};
///
/// let entries = vec![
///     VocabEntry::new(EntryId::new(25), "ピカチュウ"),
///     VocabEntry::new(EntryId::new(59), "ウインディ"),
/// ];
/// let index = VocabIndex::build(entries, ChainRules::plain()).unwrap();
///
/// assert!(index.contains("ピカチュウ"));
/// assert_eq!(index.id_of("ウインディ"), Some(EntryId::new(59)));
/// assert!(index.id_of("ミッシングノー").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct VocabIndex {
    entries: Vec<VocabEntry>,
    by_name: FxHashMap<String, usize>,
    by_id: FxHashMap<EntryId, usize>,
    /// Entry positions grouped by literal first character.
    by_first_char: FxHashMap<char, Vec<usize>>,
    /// Entry positions legal as an opening move (no terminal ending).
    openers: Vec<usize>,
    rules: ChainRules,
}

impl VocabIndex {
    /// Build an index from loaded entries.
    ///
    /// Validates that names are unique and non-empty, and that every
    /// name in the rules' exception table actually exists in the
    /// vocabulary, so a typo in the closed table surfaces here instead
    /// of silently falling through to default chaining.
    pub fn build(entries: Vec<VocabEntry>, rules: ChainRules) -> Result<Self, VocabError> {
        let mut by_name = FxHashMap::default();
        let mut by_id = FxHashMap::default();
        let mut by_first_char: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        let mut openers = Vec::new();

        for (pos, entry) in entries.iter().enumerate() {
            let Some(first) = entry.first_char() else {
                return Err(VocabError::EmptyName(pos));
            };
            if by_name.insert(entry.name.clone(), pos).is_some() {
                return Err(VocabError::DuplicateName(entry.name.clone()));
            }
            by_id.insert(entry.id, pos);
            by_first_char.entry(first).or_default().push(pos);
            if !rules.ends_in_terminal(&entry.name) {
                openers.push(pos);
            }
        }

        for name in rules.exception_names() {
            if !by_name.contains_key(name) {
                return Err(VocabError::UnknownExceptionName(name.to_string()));
            }
        }

        tracing::debug!(
            entries = entries.len(),
            openers = openers.len(),
            "vocabulary index built"
        );

        Ok(Self {
            entries,
            by_name,
            by_id,
            by_first_char,
            openers,
            rules,
        })
    }

    /// The chain rules this index was built with.
    #[must_use]
    pub fn rules(&self) -> &ChainRules {
        &self.rules
    }

    /// Exact-match membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Identifier of a name, for presentation enrichment. Absence is
    /// not an error, just "no enrichment available".
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<EntryId> {
        self.by_name.get(name).map(|&pos| self.entries[pos].id)
    }

    /// Look up an entry by identifier.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&VocabEntry> {
        self.by_id.get(&id).map(|&pos| &self.entries[pos])
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &VocabEntry> {
        self.entries.iter()
    }

    /// Uniformly random unused name whose first character equals `key`.
    ///
    /// `None` means the bucket is exhausted under the exclusions - the
    /// normal end-of-vocabulary outcome.
    #[must_use]
    pub fn sample_starting_with(
        &self,
        key: char,
        exclude: &ImHashSet<String>,
        rng: &mut GameRng,
    ) -> Option<&str> {
        let bucket = self.by_first_char.get(&key)?;
        let candidates: Vec<&str> = bucket
            .iter()
            .map(|&pos| self.entries[pos].name.as_str())
            .filter(|name| !exclude.contains(*name))
            .collect();
        rng.choose(&candidates).copied()
    }

    /// Uniformly random unused name that does not end in the terminal
    /// syllable. Used only for a session's opening move.
    #[must_use]
    pub fn sample_opening(&self, exclude: &ImHashSet<String>, rng: &mut GameRng) -> Option<&str> {
        let candidates: Vec<&str> = self
            .openers
            .iter()
            .map(|&pos| self.entries[pos].name.as_str())
            .filter(|name| !exclude.contains(*name))
            .collect();
        rng.choose(&candidates).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, name: &str) -> VocabEntry {
        VocabEntry::new(EntryId::new(id), name)
    }

    fn small_index() -> VocabIndex {
        VocabIndex::build(
            vec![
                entry(25, "ピカチュウ"),
                entry(59, "ウインディ"),
                entry(50, "ディグダ"),
                entry(371, "タツベイ"),
                entry(74, "イシツブテ"),
                entry(291, "テッカニン"),
            ],
            ChainRules::plain(),
        )
        .unwrap()
    }

    #[test]
    fn test_contains_and_id_of() {
        let index = small_index();
        assert!(index.contains("ピカチュウ"));
        assert!(!index.contains("ミュウ"));
        assert_eq!(index.id_of("ディグダ"), Some(EntryId::new(50)));
        assert_eq!(index.id_of("ミュウ"), None);
        assert_eq!(index.get(EntryId::new(25)).unwrap().name, "ピカチュウ");
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = VocabIndex::build(
            vec![entry(1, "ピカチュウ"), entry(2, "ピカチュウ")],
            ChainRules::plain(),
        )
        .unwrap_err();
        assert!(matches!(err, VocabError::DuplicateName(n) if n == "ピカチュウ"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err =
            VocabIndex::build(vec![entry(1, "")], ChainRules::plain()).unwrap_err();
        assert!(matches!(err, VocabError::EmptyName(0)));
    }

    #[test]
    fn test_exception_table_validated_against_vocabulary() {
        // Default rules name ニドラン♂ etc., which this vocabulary lacks.
        let err = VocabIndex::build(vec![entry(25, "ピカチュウ")], ChainRules::default())
            .unwrap_err();
        assert!(matches!(err, VocabError::UnknownExceptionName(_)));

        let ok = VocabIndex::build(
            vec![
                entry(25, "ピカチュウ"),
                entry(32, "ニドラン♂"),
                entry(29, "ニドラン♀"),
                entry(233, "ポリゴン2"),
                entry(474, "ポリゴンZ"),
            ],
            ChainRules::default(),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_sample_starting_with_respects_key_and_exclusions() {
        let index = small_index();
        let mut rng = GameRng::new(42);
        let mut exclude = ImHashSet::new();

        for _ in 0..20 {
            let name = index.sample_starting_with('テ', &exclude, &mut rng).unwrap();
            assert_eq!(name, "テッカニン");
        }

        exclude.insert("テッカニン".to_string());
        assert!(index.sample_starting_with('テ', &exclude, &mut rng).is_none());

        // No bucket for this key at all.
        assert!(index.sample_starting_with('ザ', &exclude, &mut rng).is_none());
    }

    #[test]
    fn test_sample_opening_skips_terminal_endings() {
        let index = small_index();
        let mut rng = GameRng::new(7);
        let exclude = ImHashSet::new();

        for _ in 0..50 {
            let name = index.sample_opening(&exclude, &mut rng).unwrap();
            assert_ne!(name, "テッカニン");
        }
    }

    #[test]
    fn test_sample_opening_exhaustion() {
        let index = VocabIndex::build(vec![entry(291, "テッカニン")], ChainRules::plain()).unwrap();
        let mut rng = GameRng::new(1);
        assert!(index.sample_opening(&ImHashSet::new(), &mut rng).is_none());
    }
}
