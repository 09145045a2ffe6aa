use crate::config::settings::{LogFormat, LoggingSettings};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Keeps the file sink alive. Buffered lines are flushed when it drops, so
/// hold it for the whole run.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggerGuard {
    _file_guard: Option<WorkerGuard>,
    log_directory: Option<PathBuf>,
}

impl LoggerGuard {
    /// Directory the rolling log file lives in, if file logging is active.
    pub fn log_directory(&self) -> Option<&PathBuf> {
        self.log_directory.as_ref()
    }
}

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    if let Some(filter) = level.and_then(|l| EnvFilter::try_new(l).ok()) {
        return filter;
    }

    if verbose {
        EnvFilter::new("word_freq=debug,info")
    } else {
        EnvFilter::new("word_freq=info")
    }
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

fn file_layer(
    settings: &LoggingSettings,
) -> Result<(BoxedLayer, WorkerGuard), tracing_appender::rolling::InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(settings.file_prefix.as_str())
        .filename_suffix("log")
        .build(&settings.directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    let layer = match settings.format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    };
    Ok((layer, guard))
}

/// Installs console logging plus, when enabled, a daily rolling log file.
///
/// A log directory that cannot be created only disables the file sink; it
/// never stops the caller from running.
pub fn init_cli_logger(verbose: bool, settings: &LoggingSettings) -> LoggerGuard {
    let filter = build_filter(verbose, settings.level.as_deref());
    let mut layers: Vec<BoxedLayer> = vec![console_layer(settings.format)];

    let mut file_guard = None;
    let mut log_directory = None;
    let mut file_error = None;

    if settings.file {
        match file_layer(settings) {
            Ok((layer, guard)) => {
                layers.push(layer);
                file_guard = Some(guard);
                log_directory = Some(settings.directory.clone());
            }
            Err(e) => file_error = Some(e),
        }
    }

    if tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()
        .is_err()
    {
        // Another subscriber is already installed (e.g. in tests).
        return LoggerGuard {
            _file_guard: None,
            log_directory: None,
        };
    }

    if let Some(e) = file_error {
        tracing::warn!(
            "File logging disabled, cannot use '{}': {}",
            settings.directory.display(),
            e
        );
    }

    LoggerGuard {
        _file_guard: file_guard,
        log_directory,
    }
}
