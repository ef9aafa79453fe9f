use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::point::Point;

/// Trait for types that can collect points from the modem.
///
/// A collector owns the whole poll: fetching the status page and turning it
/// into points. It is the seam the CLI drives, so tests can substitute a
/// collector that never touches the network.
#[async_trait]
pub trait MetricCollector: Send + Sync {
    /// Collects points stamped with the given poll timestamp.
    ///
    /// # Arguments
    /// * `timestamp` - The instant shared by every point of this poll
    ///
    /// # Returns
    /// The points in output order, or the first error encountered. No
    /// partial results are returned.
    async fn collect(&self, timestamp: DateTime<Utc>) -> Result<Vec<Point>>;
}
