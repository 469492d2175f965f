//! Production tool runner backed by `std::process::Command`.
//!
//! Every external call blocks until the child process exits. Exit statuses
//! are inspected here so a failed warp or hydrology step stops the pipeline
//! instead of letting later stages reference files that were never written.

use std::process::Command;

use tracing::debug;

use crate::twi_pipeline::common::error::{PipelineError, Result};
use crate::twi_pipeline::exec::runner::ToolRunner;
use crate::twi_pipeline::exec::types::ToolInvocation;

pub struct CommandRunner;

impl ToolRunner for CommandRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<()> {
        debug!("Executing: {}", invocation);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|e| PipelineError::ToolLaunch {
                tool: invocation.tool_name(),
                source: e,
            })?;

        if !status.success() {
            return Err(PipelineError::ToolFailed {
                tool: invocation.tool_name(),
                status: status.to_string(),
            });
        }

        Ok(())
    }

    fn capture(&self, invocation: &ToolInvocation) -> Result<String> {
        debug!("Executing (captured): {}", invocation);

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .map_err(|e| PipelineError::ToolLaunch {
                tool: invocation.tool_name(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(PipelineError::ToolFailed {
                tool: invocation.tool_name(),
                status: output.status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
