//! Pipeline stages module
//!
//! One submodule per stage of the linear pipeline: warp, pit removal, and
//! the per-method TWI calculations.

mod pitfill;
mod reproject;
mod twi_calcs;

pub use pitfill::PitFiller;
pub use reproject::Reprojector;
pub use twi_calcs::TwiCalcs;

use std::path::Path;

use crate::twi_pipeline::common::error::{PipelineError, Result};

/// Confirms a tool actually wrote its declared output. TauDEM tools can
/// exit zero after an MPI-level failure that leaves no raster behind.
pub(crate) fn ensure_output(tool: &str, path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(PipelineError::OutputMissing {
            tool: tool.to_string(),
            path: path.to_path_buf(),
        })
    }
}
