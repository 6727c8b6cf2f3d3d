//! Report persistence.

use crate::error::PipelineError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Write the report to `path`, creating or truncating the file.
///
/// Parent directories are not created; a missing directory is a
/// [`PipelineError::Write`].
pub fn save_report(content: &str, path: &Path) -> Result<(), PipelineError> {
    let write_err = |source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    debug!("Wrote {} bytes", content.len());
    info!("Report written to {}", path.display());
    Ok(())
}
