//! Dataset analysis.
//!
//! Means over the numeric columns and threshold-based abnormality counts.

pub mod aggregator;
pub mod classifier;

pub use aggregator::*;
pub use classifier::*;
