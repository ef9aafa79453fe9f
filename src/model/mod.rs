//! Model definitions for cable modem time-series points.
//!
//! This module provides the point type produced by extraction and consumed by
//! the emitters, together with the collector trait that ties a poll together.

pub mod point;
pub mod traits;
pub mod types;

// Re-export commonly used items at the module level
pub use point::{format_timestamp, FieldValue, Point};
#[cfg(test)]
pub use point::TagValue;
pub use traits::MetricCollector;
pub use types::{Direction, Measurement, Unit};
