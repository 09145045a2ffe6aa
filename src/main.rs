use clap::Parser;
use std::process::ExitCode;
use word_freq::app::runner;
use word_freq::utils::{logger, validation::Validate};
use word_freq::{
    AnalysisSummary, CliConfig, LocalStorage, Settings, WordFreqError, SUCCESS_MESSAGE,
};

fn run(config: &CliConfig) -> word_freq::Result<AnalysisSummary> {
    config.validate()?;

    let (Some(input_path), Some(output_path)) = (config.input_path(), config.output_path()) else {
        return Err(WordFreqError::UsageError {
            provided: config.paths.len(),
        });
    };

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    runner::run_analysis(LocalStorage::new(), input_path, output_path, config.monitor)
}

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // Logging comes up first, with defaults if the settings are unusable, so
    // that a settings error is itself logged.
    let (settings, settings_error) = match config.settings() {
        Ok(settings) => (settings, None),
        Err(e) => {
            let mut fallback = Settings::default();
            if let Some(dir) = &config.log_dir {
                fallback.logging.directory = dir.clone();
            }
            (fallback, Some(e))
        }
    };
    let log_guard = logger::init_cli_logger(config.verbose, &settings.logging);
    if let Some(dir) = log_guard.log_directory() {
        tracing::debug!("Log file directory: {}", dir.display());
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let outcome = match settings_error {
        Some(e) => Err(e),
        None => run(&config),
    };

    match outcome {
        Ok(summary) => {
            tracing::debug!("📁 Output saved to: {}", summary.output_path);
            println!("{}", SUCCESS_MESSAGE);
            ExitCode::SUCCESS
        }
        Err(e) => {
            runner::log_failure(&e);
            println!("{}", e.user_friendly_message());
            ExitCode::from(e.exit_code())
        }
    }
}
