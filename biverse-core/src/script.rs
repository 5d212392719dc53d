//! Script classification for chapter-label templates.
//!
//! A label template is rendered `"{n}{label}"` when the label is CJK-style
//! and `"{label} {n}"` otherwise, so the same classifier must back both the
//! vocabulary-acceptance check and the formatter.

/// Script classification of a chapter-label template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    /// Contains letters from a word-forming script; rendered as a leading word
    WordLike,
    /// Contains CJK/kana/hangul characters; rendered as a numeric affix
    CjkStyle,
    /// Empty, numeric-only or symbol-only; not usable as a label
    Unclassified,
}

/// Classify a label template by the scripts of its characters.
///
/// CJK wins over word-like so that mixed strings such as "第1章" keep affix
/// formatting.
pub fn classify(text: &str) -> ScriptClass {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ScriptClass::Unclassified;
    }
    if trimmed.chars().any(is_cjk) {
        return ScriptClass::CjkStyle;
    }
    if trimmed.chars().any(is_word_letter) {
        return ScriptClass::WordLike;
    }
    ScriptClass::Unclassified
}

/// CJK ideographs, kana and hangul
fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // CJK Extension A
        | '\u{3040}'..='\u{30FF}'   // Hiragana / Katakana
        | '\u{AC00}'..='\u{D7AF}'   // Hangul syllables
    )
}

/// Letters from the word-forming scripts the vocabulary source uses
fn is_word_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c,
            '\u{00C0}'..='\u{024F}'   // Latin-1 Supplement / Latin Extended
            | '\u{0370}'..='\u{03FF}' // Greek
            | '\u{0400}'..='\u{04FF}' // Cyrillic
            | '\u{0590}'..='\u{05FF}' // Hebrew
            | '\u{0600}'..='\u{06FF}' // Arabic
            | '\u{0900}'..='\u{0D7F}' // Devanagari through Malayalam
        )
}
