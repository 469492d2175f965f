use crate::twi_pipeline::common::error::Result;
use crate::twi_pipeline::exec::types::ToolInvocation;

pub trait ToolRunner {
    /// Runs the tool to completion, returning an error on a failed spawn or a
    /// non-zero exit status.
    fn run(&self, invocation: &ToolInvocation) -> Result<()>;

    /// Runs the tool and returns its stdout as text.
    fn capture(&self, invocation: &ToolInvocation) -> Result<String>;
}
