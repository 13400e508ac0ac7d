// SPDX-License-Identifier: Apache-2.0

//! Accent-insensitive text normalization.
//!
//! Every comparison in the crate runs over text folded by [`normalize`]:
//! lowercased, canonically decomposed, with the combining diacritical marks
//! block (U+0300..=U+036F) removed, then trimmed at both ends. Interior
//! whitespace is preserved so character offsets computed against the
//! normalized form still line up with the raw text when cutting snippets.
//!
//! The U+0300..=U+036F window covers the Latin diacritics this targets
//! (acute, grave, diaeresis, tilde) while leaving marks from other scripts
//! untouched. Note the tilde is stripped like any other mark, so "montaña"
//! and "montana" compare equal.

use unicode_normalization::UnicodeNormalization;

/// Folds `value` for comparison: lowercase, NFD, strip Latin combining
/// marks, trim.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Number of `char`s in `value`. Offsets throughout the crate are counted
/// in characters, not bytes, so windows cut from multibyte text stay on
/// boundaries.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
