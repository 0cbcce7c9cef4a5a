//! Character-level classification for katakana text.

/// Check if a character is katakana (U+30A0..U+30FF).
#[must_use]
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Check if a character is the prolonged sound mark ー (U+30FC).
#[must_use]
pub fn is_long_vowel_mark(c: char) -> bool {
    c == super::LONG_VOWEL_MARK
}

/// Check if a character is one of the nine small (subscript) katakana
/// that fold to a full-size form for chaining: ァィゥェォッャュョ.
#[must_use]
pub fn is_small_kana(c: char) -> bool {
    matches!(c, 'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' | 'ッ' | 'ャ' | 'ュ' | 'ョ')
}

/// Check if a string is plain full-width katakana (long-vowel mark
/// allowed). Used by the loader to flag entries the data source failed
/// to pre-normalize.
#[must_use]
pub fn is_katakana_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_katakana)
}
