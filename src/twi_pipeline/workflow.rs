//! Workflow orchestration module
//!
//! Sequences the individual stages into the full DEM-to-TWI run.

mod twi_workflow;

pub use twi_workflow::{TwiProducts, TwiWorkflow};
