use crate::domain::model::{FrequencyTable, RankedEntry, RankedReport};
use std::cmp::Ordering;

/// Count descending, then word ascending by byte order.
pub fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.word.as_str().cmp(b.word.as_str()))
}

pub fn rank(table: FrequencyTable) -> RankedReport {
    let mut entries: Vec<RankedEntry> = table
        .into_entries()
        .map(|(word, count)| RankedEntry { word, count })
        .collect();

    // Keys are unique, so the order is total and an unstable sort is safe.
    entries.sort_unstable_by(compare_entries);
    RankedReport::from_sorted(entries)
}
