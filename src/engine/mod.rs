//! Evaluation engine module.
//!
//! Provides report evaluation and result aggregation.

pub mod evaluator;
pub mod result;
