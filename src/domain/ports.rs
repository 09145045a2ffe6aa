use crate::domain::model::RankedReport;
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    /// Reads the whole file at `path`.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replaces the content at `path` with `data`. Implementations must not
    /// leave a partially written file behind on failure.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

pub trait Pipeline {
    /// Reads and decodes the input text.
    fn extract(&self) -> Result<String>;
    fn transform(&self, text: String) -> Result<RankedReport>;
    /// Serializes the report and returns where it was written.
    fn load(&self, report: &RankedReport) -> Result<String>;
}
