use crate::utils::error::{Result, WordFreqError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Optional settings file. Every field has a default, so an empty file
/// (or no file at all) is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file_prefix: String,
    pub level: Option<String>,
    pub format: LogFormat,
    pub file: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_prefix: "word-freq".to_string(),
            level: None,
            format: LogFormat::Compact,
            file: true,
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| WordFreqError::ConfigError {
            message: format!("Failed to read settings file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }

    /// Loads `path` when given, otherwise falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

impl Validate for LoggingSettings {
    fn validate(&self) -> Result<()> {
        if self.file {
            validate_path("logging.directory", &self.directory)?;
            validate_non_empty_string("logging.file_prefix", &self.file_prefix)?;
        }

        if let Some(level) = &self.level {
            if let Err(e) = EnvFilter::try_new(level) {
                return Err(WordFreqError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: e.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.logging.directory, PathBuf::from("logs"));
        assert!(settings.logging.file);
    }

    #[test]
    fn test_parse_logging_section() {
        let toml_content = r#"
[logging]
directory = "/var/log/word-freq"
file_prefix = "analysis"
level = "word_freq=debug"
format = "json"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(
            settings.logging.directory,
            PathBuf::from("/var/log/word-freq")
        );
        assert_eq!(settings.logging.file_prefix, "analysis");
        assert_eq!(settings.logging.level.as_deref(), Some("word_freq=debug"));
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = Settings::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_blank_prefix_fails_validation() {
        let mut settings = Settings::default();
        settings.logging.file_prefix = "  ".to_string();
        assert!(settings.validate().is_err());

        // Irrelevant once the file sink is off.
        settings.logging.file = false;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = Settings::load(Some(Path::new("definitely/not/here.toml"))).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_load_without_path_returns_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }
}
