pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::WordFrequencyPipeline;
pub use app::runner::{run_analysis, SUCCESS_MESSAGE};
pub use config::settings::Settings;
pub use config::storage::LocalStorage;
pub use crate::core::engine::AnalysisEngine;
pub use domain::model::{AnalysisSummary, FrequencyTable, RankedReport, Word};
pub use utils::error::{Result, WordFreqError};
