use crate::domain::model::RankedReport;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fmt::Write as _;
use std::path::Path;

pub const LINE_TERMINATOR: &str = "\n";

/// One `word:count` line per entry, every line terminated, no BOM.
pub fn render(report: &RankedReport) -> String {
    let mut out = String::new();
    for entry in report.entries() {
        // Writing into a String cannot fail.
        let _ = write!(out, "{}:{}{}", entry.word, entry.count, LINE_TERMINATOR);
    }
    out
}

pub fn write_report<S: Storage + ?Sized>(
    storage: &S,
    output_path: &Path,
    report: &RankedReport,
) -> Result<()> {
    let content = render(report);
    tracing::debug!(
        "Writing {} lines ({} bytes) to {}",
        report.distinct_words(),
        content.len(),
        output_path.display()
    );

    storage
        .write_file(output_path, content.as_bytes())
        .inspect_err(|e| {
            tracing::error!(
                error = %e,
                "Error writing to output file: {}",
                output_path.display()
            );
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counter::count_words;
    use crate::core::ranker::rank;
    use crate::core::tokenizer::tokenize;
    use crate::utils::error::WordFreqError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<PathBuf, Vec<u8>>>,
        fail_with: Option<io::ErrorKind>,
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| WordFreqError::io(path, io::ErrorKind::NotFound.into()))
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            if let Some(kind) = self.fail_with {
                return Err(WordFreqError::io(path, io::Error::new(kind, "mock failure")));
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }
    }

    #[test]
    fn test_render_format() {
        let report = rank(count_words(tokenize("b a b a c")));
        assert_eq!(render(&report), "a:2\nb:2\nc:1\n");
    }

    #[test]
    fn test_render_empty_report() {
        let report = rank(count_words(tokenize("")));
        assert_eq!(render(&report), "");
    }

    #[test]
    fn test_render_keeps_non_ascii_as_utf8() {
        let report = rank(count_words(tokenize("Ünïcödé ünïcödé")));
        let rendered = render(&report);
        assert_eq!(rendered, "ünïcödé:2\n");
        assert!(!rendered.as_bytes().starts_with(&[0xEF, 0xBB, 0xBF]));
    }

    #[test]
    fn test_write_report_stores_rendered_content() {
        let storage = MockStorage::default();
        let report = rank(count_words(tokenize("Cat cat CAT")));
        let path = Path::new("out.txt");

        write_report(&storage, path, &report).unwrap();

        assert_eq!(storage.read_file(path).unwrap(), b"cat:3\n");
    }

    #[test]
    fn test_write_report_propagates_classified_errors() {
        let storage = MockStorage {
            fail_with: Some(io::ErrorKind::PermissionDenied),
            ..Default::default()
        };
        let report = rank(count_words(tokenize("x")));

        let err = write_report(&storage, Path::new("out.txt"), &report).unwrap_err();
        assert!(matches!(err, WordFreqError::AccessDeniedError { .. }));
        assert!(!storage.exists(Path::new("out.txt")));
    }
}
