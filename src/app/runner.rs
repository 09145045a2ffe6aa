use crate::app::pipelines::WordFrequencyPipeline;
use crate::core::engine::AnalysisEngine;
use crate::domain::model::AnalysisSummary;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, WordFreqError};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

pub const SUCCESS_MESSAGE: &str = "Word frequency analysis completed successfully.";

/// Runs one analysis from `input_path` to `output_path`.
///
/// A panic anywhere in the pipeline is turned into
/// [`WordFreqError::UnexpectedError`] so the caller always gets a `Result`.
pub fn run_analysis<S: Storage>(
    storage: S,
    input_path: &Path,
    output_path: &Path,
    monitor_enabled: bool,
) -> Result<AnalysisSummary> {
    tracing::debug!(
        "Input file path: {}, Output file path: {}",
        input_path.display(),
        output_path.display()
    );

    let pipeline = WordFrequencyPipeline::new(storage, input_path, output_path);
    let engine = AnalysisEngine::new_with_monitoring(pipeline, monitor_enabled);

    match catch_unwind(AssertUnwindSafe(|| engine.run())) {
        Ok(result) => result,
        Err(payload) => Err(WordFreqError::unexpected(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

/// Logs a failed run with full detail; unexpected errors are marked fatal.
pub fn log_failure(error: &WordFreqError) {
    if error.is_fatal() {
        tracing::error!(
            fatal = true,
            error = ?error,
            category = ?error.category(),
            "An unexpected error occurred: {}",
            error
        );
    } else {
        tracing::error!(
            error = ?error,
            category = ?error.category(),
            severity = ?error.severity(),
            "❌ Word frequency analysis failed: {}",
            error
        );
    }
    tracing::error!("💡 Suggestion: {}", error.recovery_suggestion());
}
