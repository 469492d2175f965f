use std::path::PathBuf;

use crate::twi_pipeline::exec::ToolInvocation;

/// Target SRS of the warp step, NAD83 / UTM zone 17N.
pub const DEFAULT_TARGET_SRS: &str = "+proj=utm +zone=17 +datum=NAD83";

/// Target cell size in metres (2.5 ft source resolution).
pub const DEFAULT_CELL_SIZE: f64 = 0.762_001_52;

/// Worker processes handed to mpiexec for the TauDEM tools.
pub const DEFAULT_PROCESSES: usize = 8;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub target_srs: String,
    pub cell_size: f64,
    pub processes: usize,
    /// Directory holding the TauDEM executables. When unset the tools are
    /// resolved via PATH; the D-infinity executables in particular often
    /// need an explicit location.
    pub taudem_bin: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_srs: DEFAULT_TARGET_SRS.to_string(),
            cell_size: DEFAULT_CELL_SIZE,
            processes: DEFAULT_PROCESSES,
            taudem_bin: None,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Starts an invocation of a TauDEM tool under mpiexec, with the
    /// configured worker count. Tool arguments are appended by the caller.
    pub fn taudem_invocation(&self, tool: &str) -> ToolInvocation {
        let program = match &self.taudem_bin {
            Some(dir) => dir.join(tool),
            None => PathBuf::from(tool),
        };
        ToolInvocation::new("mpiexec")
            .arg("-n")
            .arg(self.processes.to_string())
            .arg(program)
    }
}

#[derive(Default)]
pub struct PipelineConfigBuilder {
    target_srs: Option<String>,
    cell_size: Option<f64>,
    processes: Option<usize>,
    taudem_bin: Option<Option<PathBuf>>,
}

impl PipelineConfigBuilder {
    pub fn target_srs<S: Into<String>>(mut self, srs: S) -> Self {
        self.target_srs = Some(srs.into());
        self
    }

    pub fn cell_size(mut self, size: f64) -> Self {
        self.cell_size = Some(size);
        self
    }

    pub fn processes(mut self, processes: usize) -> Self {
        self.processes = Some(processes);
        self
    }

    pub fn taudem_bin(mut self, dir: Option<PathBuf>) -> Self {
        self.taudem_bin = Some(dir);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            target_srs: self.target_srs.unwrap_or(default.target_srs),
            cell_size: self.cell_size.unwrap_or(default.cell_size),
            processes: self.processes.unwrap_or(default.processes),
            taudem_bin: self.taudem_bin.unwrap_or(default.taudem_bin),
        }
    }
}
