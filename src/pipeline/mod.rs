//! # Style Pipeline
//!
//! The pipeline resolves a compound style name, runs the color recipe and
//! then the frame recipe, and writes the result. The batch runner drives the
//! pipeline over many style names for one source photo.

pub mod batch;
pub mod engine;

// Re-exports for convenience
pub use batch::{BatchJob, BatchPlan, BatchReport, BatchRunner, JobFailure};
pub use engine::StylePipeline;
