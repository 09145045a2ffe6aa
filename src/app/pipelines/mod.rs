pub mod word_frequency_pipeline;

pub use word_frequency_pipeline::WordFrequencyPipeline;
