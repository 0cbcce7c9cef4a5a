//! Kana handling: character classification and linking-key derivation.
//!
//! ## Key Types
//!
//! - `ChainRules`: the normalization rules, including the closed
//!   exception table for names whose spoken ending is not their written
//!   final kana
//! - `fold_small_kana`: small-kana to full-size folding
//!
//! Shiritori chains on the *sound* of a name's ending, not its final
//! glyph: a long-vowel mark carries the preceding mora, small kana fold
//! to their full-size forms, and a handful of names with non-kana final
//! symbols get explicit overrides.

pub mod classify;
pub mod normalize;

pub use classify::{is_katakana, is_long_vowel_mark, is_small_kana};
pub use normalize::{fold_small_kana, ChainRules, LONG_VOWEL_MARK, TERMINAL_SYLLABLE};
