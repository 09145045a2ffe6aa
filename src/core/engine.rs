use crate::domain::model::AnalysisSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::cell::RefCell;

/// Drives a pipeline through read, process and write, logging each phase.
pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
    monitor: RefCell<SystemMonitor>,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RefCell::new(SystemMonitor::new(monitor_enabled)),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<AnalysisSummary> {
        tracing::info!("Starting word frequency analysis.");
        self.monitor.borrow_mut().log_stats("Start");

        tracing::info!("Reading input file.");
        let text = self.pipeline.extract()?;
        self.monitor.borrow_mut().log_stats("Read");

        tracing::info!("Processing word frequencies.");
        let report = self.pipeline.transform(text)?;
        self.monitor.borrow_mut().log_stats("Process");

        tracing::info!("Writing results to output file.");
        let output_path = self.pipeline.load(&report)?;
        self.monitor.borrow_mut().log_stats("Write");

        let summary = AnalysisSummary {
            output_path,
            distinct_words: report.distinct_words(),
            total_words: report.total_words(),
        };

        tracing::info!(
            total_words = summary.total_words,
            distinct_words = summary.distinct_words,
            output = %summary.output_path,
            "Word frequency analysis completed successfully."
        );
        self.monitor.borrow_mut().log_final_stats();

        Ok(summary)
    }
}
