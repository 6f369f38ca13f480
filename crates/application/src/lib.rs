//! Application layer - Use cases and orchestration
//!
//! Defines the ports the conversion pipeline depends on and the services
//! that orchestrate them: the model registry, input resolution, output
//! transformation, and maintenance.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
