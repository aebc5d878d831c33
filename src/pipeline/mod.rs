//! Pipeline composition and execution for exploratory text analysis.

mod runner;

pub use runner::{Pipeline, PipelineConfig, PipelineStep, Report, StopwordConfig};
