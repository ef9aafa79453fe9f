//! Test fixtures and common test data.
//!
//! This module provides common test data and fixture generators used across
//! the test suite.

/// Test date and time generators.
pub mod dates {
    use chrono::{DateTime, TimeZone, Utc};

    /// Creates the poll timestamp most tests use: 2024-01-01T12:00:00Z.
    pub fn test_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    /// The same instant as [`test_timestamp`] plus a sub-second part.
    pub fn test_timestamp_with_nanos() -> DateTime<Utc> {
        test_timestamp() + chrono::Duration::nanoseconds(734_000_123)
    }
}

/// Sample pages and points.
pub mod samples {
    use super::dates::test_timestamp;
    use crate::model::{Direction, Measurement, Point};
    use crate::test_utils::html::{StatusPageBuilder, TableRow};

    /// A status page with three downstream channels, two upstream channels
    /// and a trailing header row in the downstream table.
    pub fn sample_status_page() -> String {
        StatusPageBuilder::new()
            .downstream(TableRow::downstream(1, 5, 609000000, 3.1, 38.5, 12, 0))
            .downstream(TableRow::downstream(2, 6, 615000000, 2.9, 38.2, 3, 1))
            .downstream(TableRow::downstream(3, 7, 621000000, 2.6, 37.9, 0, 0))
            .downstream_footer("Total")
            .upstream(TableRow::upstream(1, 2, 30600000, 45.3))
            .upstream(TableRow::upstream(2, 1, 24000000, 44.8))
            .build()
    }

    /// The points extracted from a page with one channel in each direction.
    pub fn single_channel_points() -> Vec<Point> {
        vec![
            Point::builder(Measurement::CableModem, test_timestamp())
                .tag("channel", 1i64)
                .tag("direction", Direction::Downstream)
                .field("channel_id", 5i64)
                .field("frequency", 609000000i64)
                .field("power", 3.1)
                .field("snr", 38.5)
                .field("corrected", 12i64)
                .field("uncorrectables", 0i64)
                .build(),
            Point::builder(Measurement::CableModem, test_timestamp())
                .tag("channel", 1i64)
                .tag("direction", Direction::Upstream)
                .field("channel_id", 2i64)
                .field("frequency", 30600000i64)
                .field("power", 45.3)
                .build(),
        ]
    }

    /// The points of [`sample_status_page`].
    pub fn sample_points() -> Vec<Point> {
        crate::modem::parse_status_page(&sample_status_page(), test_timestamp()).unwrap()
    }
}
