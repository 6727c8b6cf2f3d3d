//! Pipeline error types.
//!
//! Every failure is fatal. Each variant knows which pipeline stage produced
//! it so the top level can name the failing stage.

use crate::models::Stage;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the analysis pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Source file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row (or the header) violates the fixed 8-column schema.
    #[error("{}: line {line}: {message}", .path.display())]
    DataFormat {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// No readings were loaded, so the means are undefined.
    #[error("dataset is empty; averages are undefined")]
    EmptyDataset,

    /// The report could not be serialized.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    /// The destination could not be created or written.
    #[error("cannot write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// The stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Unreadable { .. } | PipelineError::DataFormat { .. } => Stage::Load,
            PipelineError::EmptyDataset => Stage::Aggregate,
            PipelineError::Render(_) => Stage::Report,
            PipelineError::Write { .. } => Stage::Write,
        }
    }
}
