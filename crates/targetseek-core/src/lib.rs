//! TargetSeek Core - Core types for target-value search
//!
//! This crate provides the fundamental types shared by the TargetSeek crates:
//! - Data types for the values being searched (`DataPoint`, `ValueSet`)
//! - The aggregation `Mode` and its matching `Tolerance`
//! - `Solution` for a matched subset
//! - The error taxonomy

pub mod data;
pub mod error;
pub mod mode;
pub mod solution;
pub mod tolerance;

#[cfg(test)]
mod tests;

pub use data::{DataPoint, ValueSet};
pub use error::{Result, SeekError};
pub use mode::Mode;
pub use solution::Solution;
pub use tolerance::Tolerance;
