//! Warp stage: reprojects the input DEM into the target SRS and resolution
//! with gdalwarp. Runs unconditionally; the downstream stages are the ones
//! that skip on existing outputs.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::twi_pipeline::common::error::Result;
use crate::twi_pipeline::config::PipelineConfig;
use crate::twi_pipeline::exec::{ToolInvocation, ToolRunner};
use crate::twi_pipeline::naming;
use crate::twi_pipeline::stages::ensure_output;

pub struct Reprojector<'a> {
    config: &'a PipelineConfig,
}

impl<'a> Reprojector<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    pub fn run<R: ToolRunner>(&self, runner: &R, input: &Path) -> Result<PathBuf> {
        let output = naming::reprojected_path(input)?;

        // Informational only; a raster without a readable SRS still warps if
        // gdalwarp can make sense of it.
        let srs_probe = ToolInvocation::new("gdalsrsinfo")
            .arg("-o")
            .arg("proj4")
            .arg(input);
        match runner.capture(&srs_probe) {
            Ok(srs) => info!("Source projection: {}", srs.trim()),
            Err(e) => warn!("Could not read source projection: {}", e),
        }

        info!(
            "Projecting {} to {} at {} m",
            input.display(),
            self.config.target_srs,
            self.config.cell_size
        );

        let cell_size = self.config.cell_size.to_string();
        let warp = ToolInvocation::new("gdalwarp")
            .arg(input)
            .arg(&output)
            .arg("-t_srs")
            .arg(&self.config.target_srs)
            .arg("-tr")
            .arg(&cell_size)
            .arg(&cell_size);
        runner.run(&warp)?;
        ensure_output("gdalwarp", &output)?;

        Ok(output)
    }
}
