use crate::domain::model::Word;

/// Characters that separate words. Nothing else splits a token, punctuation
/// included.
pub const DELIMITERS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Lazily splits `text` into normalized words.
pub fn tokenize(text: &str) -> impl Iterator<Item = Word> + '_ {
    text.split(DELIMITERS)
        .filter(|fragment| !fragment.is_empty())
        .filter_map(Word::new)
}

/// Number of raw, non-empty fragments between delimiters.
pub fn count_tokens(text: &str) -> usize {
    text.split(DELIMITERS).filter(|f| !f.is_empty()).count()
}
