//! Chain selector: the opponent's move choice.
//!
//! A thin composition over the normalizer and the index: derive the
//! linking key of the previous name, then sample an unused successor
//! from that key's bucket. On exhaustion it reports `None` - it never
//! fabricates a move.
//!
//! The selector may legitimately return a name that itself ends in the
//! terminal syllable: that is the opponent's forced losing move, and
//! scoring it is the state machine's job, not the selector's.

use im::HashSet as ImHashSet;

use crate::core::GameRng;
use crate::vocab::VocabIndex;

/// Opponent move selection over a borrowed index.
#[derive(Clone, Copy, Debug)]
pub struct ChainSelector<'a> {
    index: &'a VocabIndex,
}

impl<'a> ChainSelector<'a> {
    /// Create a selector over the given index.
    #[must_use]
    pub fn new(index: &'a VocabIndex) -> Self {
        Self { index }
    }

    /// Pick a reply to `previous`: a uniformly random unused name whose
    /// first character is `previous`'s linking key.
    #[must_use]
    pub fn next_move(
        &self,
        previous: &str,
        used: &ImHashSet<String>,
        rng: &mut GameRng,
    ) -> Option<&'a str> {
        let key = self.index.rules().linking_key(previous);
        let reply = self.index.sample_starting_with(key, used, rng);
        tracing::trace!(previous, key = %key, reply = reply.unwrap_or("<none>"), "selector");
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kana::ChainRules;
    use crate::vocab::{EntryId, VocabEntry};

    fn index() -> VocabIndex {
        VocabIndex::build(
            vec![
                VocabEntry::new(EntryId::new(25), "ピカチュウ"),
                VocabEntry::new(EntryId::new(59), "ウインディ"),
                VocabEntry::new(EntryId::new(74), "イシツブテ"),
                VocabEntry::new(EntryId::new(291), "テッカニン"),
            ],
            ChainRules::plain(),
        )
        .unwrap()
    }

    #[test]
    fn test_next_move_follows_linking_key() {
        let index = index();
        let selector = ChainSelector::new(&index);
        let mut rng = GameRng::new(42);
        let used = ImHashSet::new();

        // ピカチュウ chains on ウ; the only ウ name is ウインディ.
        assert_eq!(
            selector.next_move("ピカチュウ", &used, &mut rng),
            Some("ウインディ")
        );
    }

    #[test]
    fn test_next_move_applies_long_vowel_and_folding() {
        let index = VocabIndex::build(
            vec![
                VocabEntry::new(EntryId::new(146), "ファイヤー"),
                VocabEntry::new(EntryId::new(193), "ヤンヤンマ"),
            ],
            ChainRules::plain(),
        )
        .unwrap();
        let selector = ChainSelector::new(&index);
        let mut rng = GameRng::new(1);

        // ファイヤー resolves through ー to ヤ.
        assert_eq!(
            selector.next_move("ファイヤー", &ImHashSet::new(), &mut rng),
            Some("ヤンヤンマ")
        );
    }

    #[test]
    fn test_next_move_excludes_used() {
        let index = index();
        let selector = ChainSelector::new(&index);
        let mut rng = GameRng::new(42);

        let mut used = ImHashSet::new();
        used.insert("ウインディ".to_string());

        assert_eq!(selector.next_move("ピカチュウ", &used, &mut rng), None);
    }

    #[test]
    fn test_next_move_may_return_terminal_name() {
        let index = index();
        let selector = ChainSelector::new(&index);
        let mut rng = GameRng::new(42);

        // イシツブテ chains on テ and the bucket holds only テッカニン.
        assert_eq!(
            selector.next_move("イシツブテ", &ImHashSet::new(), &mut rng),
            Some("テッカニン")
        );
    }

    #[test]
    fn test_exhaustion_is_none() {
        let index = index();
        let selector = ChainSelector::new(&index);
        let mut rng = GameRng::new(42);

        // No name starts with ン, and no name starts with ダ here.
        assert_eq!(selector.next_move("テッカニン", &ImHashSet::new(), &mut rng), None);
    }
}
