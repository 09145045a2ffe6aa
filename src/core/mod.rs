pub mod counter;
pub mod engine;
pub mod ranker;
pub mod serializer;
pub mod tokenizer;

pub use crate::domain::model::{AnalysisSummary, FrequencyTable, RankedEntry, RankedReport, Word};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;
