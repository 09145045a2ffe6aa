use std::collections::HashMap;
use std::fmt;

/// A normalized token: trimmed, lowercased, never empty.
///
/// The only way to build one is [`Word::new`], which applies the
/// normalization, so two `Word`s differing only by case cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        // Folded char by char: Σ always becomes σ, wherever it sits.
        Some(Self(trimmed.chars().flat_map(char::to_lowercase).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Word -> occurrence count. Iteration order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Word, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, word: Word) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        Word::new(word).and_then(|w| self.counts.get(&w).copied())
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (Word, u64)> {
        self.counts.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: Word,
    pub count: u64,
}

/// Frequency table entries in their final, fully determined order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedReport {
    entries: Vec<RankedEntry>,
}

impl RankedReport {
    /// Callers must pass entries already in report order.
    pub(crate) fn from_sorted(entries: Vec<RankedEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn distinct_words(&self) -> usize {
        self.entries.len()
    }

    pub fn total_words(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a completed run reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub output_path: String,
    pub distinct_words: usize,
    pub total_words: u64,
}
