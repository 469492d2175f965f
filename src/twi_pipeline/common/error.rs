use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input raster not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Cannot derive output name from raster path: {0}")]
    InvalidRasterName(PathBuf),

    #[error("Failed to launch {tool}: {source}")]
    ToolLaunch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}")]
    ToolFailed { tool: String, status: String },

    #[error("{tool} finished but did not produce {path}")]
    OutputMissing { tool: String, path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
