use crate::core::counter::count_words;
use crate::core::ranker::rank;
use crate::core::serializer::write_report;
use crate::core::tokenizer::tokenize;
use crate::domain::model::RankedReport;
use crate::domain::ports::{Pipeline, Storage};
use crate::utils::error::{Result, WordFreqError};
use std::path::PathBuf;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

pub struct WordFrequencyPipeline<S: Storage> {
    storage: S,
    input_path: PathBuf,
    output_path: PathBuf,
}

impl<S: Storage> WordFrequencyPipeline<S> {
    pub fn new(storage: S, input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Decodes UTF-8, skipping a leading BOM and replacing invalid sequences.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

impl<S: Storage> Pipeline for WordFrequencyPipeline<S> {
    fn extract(&self) -> Result<String> {
        if !self.storage.exists(&self.input_path) {
            return Err(WordFreqError::InputNotFoundError {
                path: self.input_path.clone(),
            });
        }

        let bytes = self.storage.read_file(&self.input_path)?;
        tracing::debug!(
            "Read {} bytes from {}",
            bytes.len(),
            self.input_path.display()
        );
        Ok(decode_text(&bytes))
    }

    fn transform(&self, text: String) -> Result<RankedReport> {
        let report = rank(count_words(tokenize(&text)));
        tracing::debug!(
            "Counted {} words, {} distinct",
            report.total_words(),
            report.distinct_words()
        );
        Ok(report)
    }

    fn load(&self, report: &RankedReport) -> Result<String> {
        write_report(&self.storage, &self.output_path, report)?;
        Ok(self.output_path.display().to_string())
    }
}
