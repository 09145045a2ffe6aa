use crate::domain::model::{FrequencyTable, Word};

pub fn count_words<I>(words: I) -> FrequencyTable
where
    I: IntoIterator<Item = Word>,
{
    let mut table = FrequencyTable::new();
    for word in words {
        table.record(word);
    }
    table
}
