use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordFreqError {
    #[error("Invalid number of arguments. Expected: 2, Provided: {provided}")]
    UsageError { provided: usize },

    #[error("Input file does not exist: {}", .path.display())]
    InputNotFoundError { path: PathBuf },

    #[error("Access to '{}' is denied: {source}", .path.display())]
    AccessDeniedError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error on '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unexpected error: {message}")]
    UnexpectedError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    InputNotFound,
    AccessDenied,
    Io,
    Configuration,
    Unexpected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl WordFreqError {
    /// Wraps an I/O failure on `path`, splitting permission problems out
    /// from every other kind.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::AccessDeniedError { path, source },
            _ => Self::IoError { path, source },
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UsageError { .. } => ErrorCategory::Usage,
            Self::InputNotFoundError { .. } => ErrorCategory::InputNotFound,
            Self::AccessDeniedError { .. } => ErrorCategory::AccessDenied,
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::UnexpectedError { .. } => ErrorCategory::Unexpected,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage | ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::InputNotFound | ErrorCategory::AccessDenied | ErrorCategory::Io => {
                ErrorSeverity::High
            }
            ErrorCategory::Unexpected => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Only unexpected failures are logged as fatal.
    pub fn is_fatal(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// The one-line message shown to the person running the tool.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UsageError { .. } => {
                "Error: Please provide exactly two arguments - input file path and output file path."
                    .to_string()
            }
            Self::InputNotFoundError { .. } => "Error: Input file does not exist.".to_string(),
            Self::AccessDeniedError { .. } => {
                "Error: Access to the file is denied. Please check file permissions.".to_string()
            }
            Self::IoError { source, .. } => format!("Error: An I/O error occurred. {}", source),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::TomlError(_) => {
                format!("Error: Invalid configuration. {}", self)
            }
            Self::UnexpectedError { message } => {
                format!("An unexpected error occurred: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Usage => "Run as: word-freq <input-file-path> <output-file-path>",
            ErrorCategory::InputNotFound => "Check the input path for typos and that it names a regular file",
            ErrorCategory::AccessDenied => {
                "Make sure the input is readable and the output directory is writable"
            }
            ErrorCategory::Io => "Check that the output directory exists and the disk is not full",
            ErrorCategory::Configuration => "Fix the settings file or command-line option named above",
            ErrorCategory::Unexpected => "Re-run with --verbose and inspect the log file",
        }
    }
}

pub type Result<T> = std::result::Result<T, WordFreqError>;
