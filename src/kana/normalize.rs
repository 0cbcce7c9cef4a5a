//! Linking-key derivation.
//!
//! The linking key of a name is the single full-size katakana character
//! the next name must start with:
//!
//! 1. take the final character of the name
//! 2. if it is the long-vowel mark ー, use the second-to-last character
//!    instead (the mark elongates the preceding mora)
//! 3. if the full name has an entry in the exception table, the override
//!    character wins (names whose canonical final symbol is not a plain
//!    kana, e.g. ニドラン♂ spoken "...オス")
//! 4. fold small kana to their full-size forms
//!
//! The order matters: the back-reference changes *which* character is
//! inspected, and an exception target could itself need folding, so
//! substitution runs before the fold.

use rustc_hash::FxHashMap;

/// The prolonged sound mark ー.
pub const LONG_VOWEL_MARK: char = 'ー';

/// The syllable ン. No name in the vocabulary starts with it, so any
/// name ending in it has no legal successor.
pub const TERMINAL_SYLLABLE: char = 'ン';

/// Fold a small (subscript) kana to its full-size counterpart.
///
/// Closed 9-entry mapping; every other character passes through.
#[must_use]
pub fn fold_small_kana(c: char) -> char {
    match c {
        'ァ' => 'ア',
        'ィ' => 'イ',
        'ゥ' => 'ウ',
        'ェ' => 'エ',
        'ォ' => 'オ',
        'ッ' => 'ツ',
        'ャ' => 'ヤ',
        'ュ' => 'ユ',
        'ョ' => 'ヨ',
        _ => c,
    }
}

/// Chain-normalization rules: the linking-key algorithm plus the closed
/// exception table for names whose spoken ending differs from their
/// written one.
///
/// ## Example
///
/// ```
/// use shiritori_engine::ChainRules;
///
/// let rules = ChainRules::default();
/// assert_eq!(rules.linking_key("ファイヤー"), 'ヤ');
/// assert_eq!(rules.linking_key("スナバァ"), 'ア');
/// assert_eq!(rules.linking_key("ニドラン♂"), 'ス');
/// ```
#[derive(Clone, Debug)]
pub struct ChainRules {
    /// Full name → override linking character.
    exceptions: FxHashMap<String, char>,
}

impl Default for ChainRules {
    /// The standard table: the four names whose final symbol is a
    /// gendered glyph or an alphanumeric suffix.
    fn default() -> Self {
        Self::with_exceptions([
            ("ニドラン♂", 'ス'),
            ("ニドラン♀", 'メ'),
            ("ポリゴン2", 'ツ'),
            ("ポリゴンZ", 'ト'),
        ])
    }
}

impl ChainRules {
    /// Rules with no exceptions at all.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            exceptions: FxHashMap::default(),
        }
    }

    /// Rules with an explicit exception table.
    #[must_use]
    pub fn with_exceptions<'a, I>(table: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, char)>,
    {
        Self {
            exceptions: table
                .into_iter()
                .map(|(name, c)| (name.to_string(), c))
                .collect(),
        }
    }

    /// Names the exception table covers, for build-time validation
    /// against the vocabulary.
    pub fn exception_names(&self) -> impl Iterator<Item = &str> {
        self.exceptions.keys().map(String::as_str)
    }

    /// Derive the linking key of `name`.
    ///
    /// Total over non-empty names; always returns a full-size katakana
    /// character, never a small kana and never ー. Callers guarantee
    /// non-empty input.
    #[must_use]
    pub fn linking_key(&self, name: &str) -> char {
        debug_assert!(!name.is_empty(), "linking_key requires a non-empty name");

        let mut rev = name.chars().rev();
        let mut key = rev.next().unwrap_or(TERMINAL_SYLLABLE);

        // ー elongates the preceding mora; chain on that instead.
        if key == LONG_VOWEL_MARK {
            if let Some(prev) = rev.next() {
                key = prev;
            }
        }

        if let Some(&over) = self.exceptions.get(name) {
            key = over;
        }

        fold_small_kana(key)
    }

    /// Whether a name ends in the terminal syllable ン once normalized.
    ///
    /// Such a name has no legal successor: producing it ends the game
    /// for whoever played it.
    #[must_use]
    pub fn ends_in_terminal(&self, name: &str) -> bool {
        self.linking_key(name) == TERMINAL_SYLLABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_final_character() {
        let rules = ChainRules::default();
        assert_eq!(rules.linking_key("ピカチュウ"), 'ウ');
        assert_eq!(rules.linking_key("ディグダ"), 'ダ');
    }

    #[test]
    fn test_long_vowel_back_reference() {
        let rules = ChainRules::default();
        assert_eq!(rules.linking_key("ファイヤー"), 'ヤ');
        assert_eq!(rules.linking_key("フリーザー"), 'ザ');
    }

    #[test]
    fn test_small_kana_folding() {
        let rules = ChainRules::default();
        assert_eq!(rules.linking_key("スナバァ"), 'ア');
        assert_eq!(rules.linking_key("ラッタ"), 'タ');

        for (small, large) in [
            ('ァ', 'ア'),
            ('ィ', 'イ'),
            ('ゥ', 'ウ'),
            ('ェ', 'エ'),
            ('ォ', 'オ'),
            ('ッ', 'ツ'),
            ('ャ', 'ヤ'),
            ('ュ', 'ユ'),
            ('ョ', 'ヨ'),
        ] {
            assert_eq!(fold_small_kana(small), large);
        }
        assert_eq!(fold_small_kana('ア'), 'ア');
    }

    #[test]
    fn test_long_vowel_then_fold() {
        // Small kana reached through the back-reference still folds.
        let rules = ChainRules::default();
        assert_eq!(rules.linking_key("ウィー"), 'イ');
    }

    #[test]
    fn test_exception_table() {
        let rules = ChainRules::default();
        assert_eq!(rules.linking_key("ニドラン♂"), 'ス');
        assert_eq!(rules.linking_key("ニドラン♀"), 'メ');
        assert_eq!(rules.linking_key("ポリゴン2"), 'ツ');
        assert_eq!(rules.linking_key("ポリゴンZ"), 'ト');
    }

    #[test]
    fn test_plain_rules_have_no_exceptions() {
        let rules = ChainRules::plain();
        assert_eq!(rules.exception_names().count(), 0);
        // Without the override, the literal final symbol comes back.
        assert_eq!(rules.linking_key("ニドラン♂"), '♂');
    }

    #[test]
    fn test_ends_in_terminal() {
        let rules = ChainRules::default();
        assert!(rules.ends_in_terminal("テッカニン"));
        assert!(rules.ends_in_terminal("イワーン"));
        assert!(!rules.ends_in_terminal("ピカチュウ"));
        // ン followed by ー resolves back to ン.
        assert!(rules.ends_in_terminal("ンー"));
    }

    #[test]
    fn test_key_is_never_small_or_long_vowel() {
        let rules = ChainRules::default();
        for name in ["スナバァ", "ファイヤー", "キャタピー", "ミュウ"] {
            let key = rules.linking_key(name);
            assert!(crate::kana::is_katakana(key), "{name} -> {key}");
            assert!(!crate::kana::is_small_kana(key), "{name} -> {key}");
            assert_ne!(key, LONG_VOWEL_MARK, "{name}");
        }
    }
}
