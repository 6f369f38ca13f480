//! Domain layer for Accessify
//!
//! Contains the conversion vocabulary: input and output kinds, inference
//! capabilities, conversion requests and results, and the pure text
//! formatters that produce accessibility output without any model.

pub mod entities;
pub mod errors;
pub mod formatting;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
