//! Common utilities module
//!
//! Shared definitions used across the TWI pipeline.

pub mod error;

pub use error::{PipelineError, Result};
