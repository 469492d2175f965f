use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::twi_pipeline::{
    common::error::{PipelineError, Result},
    config::PipelineConfig,
    exec::{CommandRunner, ToolRunner},
    naming::RoutingProducts,
    routing::RoutingMethod,
    stages::{PitFiller, Reprojector, TwiCalcs},
};

/// Paths of everything the workflow produced (or found already present).
#[derive(Debug, Clone)]
pub struct TwiProducts {
    pub reprojected: PathBuf,
    pub filled: PathBuf,
    pub d8: RoutingProducts,
    pub dinf: RoutingProducts,
}

/// The full DEM-to-TWI run: warp, pit removal, then the D8 and D-infinity
/// calculations in sequence. Generic over the tool runner so tests can
/// substitute a recording mock for the real subprocess calls.
pub struct TwiWorkflow<R: ToolRunner> {
    runner: R,
    config: PipelineConfig,
}

impl TwiWorkflow<CommandRunner> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            runner: CommandRunner,
            config,
        }
    }
}

impl<R: ToolRunner> TwiWorkflow<R> {
    pub fn with_runner(runner: R, config: PipelineConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    #[instrument(skip(self, input), fields(input = %input.as_ref().display()))]
    pub fn run<P: AsRef<Path>>(&self, input: P) -> Result<TwiProducts> {
        let input = input.as_ref();
        if !input.exists() {
            return Err(PipelineError::InputNotFound(input.to_path_buf()));
        }

        let reprojected = Reprojector::new(&self.config).run(&self.runner, input)?;
        let filled = PitFiller::new(&self.config).run(&self.runner, &reprojected)?;

        let d8 = TwiCalcs::new(&self.config, RoutingMethod::D8).run(&self.runner, &filled)?;
        let dinf =
            TwiCalcs::new(&self.config, RoutingMethod::DInfinity).run(&self.runner, &filled)?;

        info!(
            "TWI layers complete: {} and {}",
            d8.twi.display(),
            dinf.twi.display()
        );

        Ok(TwiProducts {
            reprojected,
            filled,
            d8,
            dinf,
        })
    }
}
