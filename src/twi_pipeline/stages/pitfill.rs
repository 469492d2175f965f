//! Pit-removal stage: produces the hydrologically corrected elevation
//! raster with TauDEM's pitremove. Skipped when the `fel` output already
//! exists; existence is the only freshness check, matching the naming
//! convention's role as the pipeline's memoization.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::twi_pipeline::common::error::Result;
use crate::twi_pipeline::config::PipelineConfig;
use crate::twi_pipeline::exec::ToolRunner;
use crate::twi_pipeline::naming;
use crate::twi_pipeline::stages::ensure_output;

pub struct PitFiller<'a> {
    config: &'a PipelineConfig,
}

impl<'a> PitFiller<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    pub fn run<R: ToolRunner>(&self, runner: &R, reprojected: &Path) -> Result<PathBuf> {
        let filled = naming::filled_path(reprojected)?;

        if filled.exists() {
            info!("Filled elevation already exists: {}", filled.display());
            return Ok(filled);
        }

        info!("Removing pits from {}", reprojected.display());

        let invocation = self
            .config
            .taudem_invocation("pitremove")
            .arg("-z")
            .arg(reprojected)
            .arg("-fel")
            .arg(&filled);
        runner.run(&invocation)?;
        ensure_output("pitremove", &filled)?;

        Ok(filled)
    }
}
