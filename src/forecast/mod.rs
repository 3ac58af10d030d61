//! The occupancy forecast engine: model parameters, jitter sources, and
//! the `Forecaster` that combines them.

pub mod config;
pub mod jitter;
pub mod model;

pub use config::ModelConfig;
pub use jitter::{FixedJitter, JitterSource, UniformJitter};
pub use model::{CrowdModel, Forecaster};
