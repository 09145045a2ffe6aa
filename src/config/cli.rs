use crate::config::settings::Settings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_argument_count, validate_path, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "word-freq")]
#[command(about = "Counts word occurrences in a text file and writes a ranked report")]
pub struct CliConfig {
    /// Input file path followed by output file path. Options go before the
    /// paths; everything from the first path on is taken as a path, even
    /// when it starts with '-'.
    #[arg(value_name = "PATH", trailing_var_arg = true, allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,

    /// Path to an optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the daily rolling log file (overrides the settings file)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log CPU and memory usage at each phase
    #[arg(long)]
    pub monitor: bool,
}

impl CliConfig {
    pub fn input_path(&self) -> Option<&Path> {
        self.paths.first().map(PathBuf::as_path)
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.paths.get(1).map(PathBuf::as_path)
    }

    /// Loads the settings file, if any, and applies command-line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(dir) = &self.log_dir {
            validate_path("log_dir", dir)?;
            settings.logging.directory = dir.clone();
        }
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_argument_count(self.paths.as_slice(), 2)?;
        validate_path("input_path", &self.paths[0])?;
        validate_path("output_path", &self.paths[1])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_parse_two_paths() {
        let config = CliConfig::try_parse_from(["word-freq", "in.txt", "out.txt"]).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.input_path(), Some(Path::new("in.txt")));
        assert_eq!(config.output_path(), Some(Path::new("out.txt")));
        assert!(!config.verbose);
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        for args in [
            vec!["word-freq"],
            vec!["word-freq", "in.txt"],
            vec!["word-freq", "a", "b", "c"],
        ] {
            let config = CliConfig::try_parse_from(args).unwrap();
            let err = config.validate().unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Usage);
        }
    }

    #[test]
    fn test_dash_prefixed_arguments_count_as_paths() {
        let extra = CliConfig::try_parse_from(["word-freq", "in.txt", "out.txt", "-x"]).unwrap();
        assert_eq!(extra.paths.len(), 3);
        assert_eq!(
            extra.validate().unwrap_err().category(),
            ErrorCategory::Usage
        );

        let dashed = CliConfig::try_parse_from(["word-freq", "in.txt", "-dash-name"]).unwrap();
        assert!(dashed.validate().is_ok());
        assert_eq!(dashed.output_path(), Some(Path::new("-dash-name")));
    }

    #[test]
    fn test_options_do_not_count_as_paths() {
        let config = CliConfig::try_parse_from([
            "word-freq",
            "--verbose",
            "--log-dir",
            "/tmp/logs",
            "in.txt",
            "out.txt",
        ])
        .unwrap();

        assert!(config.validate().is_ok());
        assert!(config.verbose);
        assert_eq!(
            config.settings().unwrap().logging.directory,
            PathBuf::from("/tmp/logs")
        );
    }
}
