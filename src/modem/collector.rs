//! Status page collector implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::error::Result;
use crate::model::{MetricCollector, Point};
use crate::modem::client::Client;
use crate::modem::extractor::parse_status_page;

/// Collector for per-channel signal statistics.
///
/// Fetches the status page once and extracts one point per downstream and
/// upstream channel.
pub struct ModemStatusCollector {
    client: Arc<Client>,
}

impl ModemStatusCollector {
    /// Creates a collector for the SB6183 page layout.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetricCollector for ModemStatusCollector {
    async fn collect(&self, timestamp: DateTime<Utc>) -> Result<Vec<Point>> {
        let body = self.client.get_status_page().await?;
        let points = parse_status_page(&body, timestamp)?;
        tracing::info!(
            "Collected {} channel points from {}",
            points.len(),
            self.client.url()
        );
        Ok(points)
    }
}
