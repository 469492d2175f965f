//! TWI pipeline module
//!
//! Orchestrates the external GDAL and TauDEM tools that turn a DEM into
//! Topographic Wetness Index layers, with separate modules for process
//! invocation, path naming, the individual stages, and workflow sequencing.

pub mod common;
pub mod config;
pub mod exec;
pub mod naming;
pub mod routing;
pub mod stages;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use common::{PipelineError, Result};

pub use config::{PipelineConfig, PipelineConfigBuilder};

pub use exec::{CommandRunner, ToolInvocation, ToolRunner};

pub use naming::RoutingProducts;

pub use routing::RoutingMethod;

pub use workflow::{TwiProducts, TwiWorkflow};
