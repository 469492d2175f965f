pub mod logger;
pub mod twi_pipeline;
