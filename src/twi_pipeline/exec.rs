//! External process invocation module
//!
//! The pipeline never computes anything itself; every stage shells out to
//! GDAL or TauDEM. This module isolates that boundary behind the
//! [`ToolRunner`] trait so the orchestration logic is testable without the
//! external executables installed.

mod command_runner;
mod runner;
pub mod types;

pub use command_runner::CommandRunner;
pub use runner::ToolRunner;
pub use types::ToolInvocation;
