//! HTML generation utilities for testing.
//!
//! This module provides builders for status pages shaped like the SB6183's
//! `RgConnect.asp`: two preamble tables followed by the downstream and
//! upstream channel tables, each opening with a title row and a column
//! header row.

const DOWNSTREAM_HEADERS: [&str; 9] = [
    "Channel",
    "Lock Status",
    "Modulation",
    "Channel ID",
    "Frequency",
    "Power",
    "SNR",
    "Corrected",
    "Uncorrectables",
];

const UPSTREAM_HEADERS: [&str; 7] = [
    "Channel",
    "Lock Status",
    "US Channel Type",
    "Channel ID",
    "Symbol Rate",
    "Frequency",
    "Power",
];

/// The `td` cells of one data row.
#[derive(Debug, Clone)]
pub struct TableRow {
    cells: Vec<String>,
}

impl TableRow {
    /// Creates a downstream row with units rendered the way the firmware does.
    pub fn downstream(
        channel: i64,
        channel_id: i64,
        frequency_hz: i64,
        power_dbmv: f64,
        snr_db: f64,
        corrected: i64,
        uncorrectables: i64,
    ) -> Self {
        Self {
            cells: vec![
                channel.to_string(),
                "Locked".to_string(),
                "QAM256".to_string(),
                channel_id.to_string(),
                format!("{} Hz", frequency_hz),
                format!("{} dBmV", power_dbmv),
                format!("{} dB", snr_db),
                corrected.to_string(),
                uncorrectables.to_string(),
            ],
        }
    }

    /// Creates an upstream row with units rendered the way the firmware does.
    pub fn upstream(channel: i64, channel_id: i64, frequency_hz: i64, power_dbmv: f64) -> Self {
        Self {
            cells: vec![
                channel.to_string(),
                "Locked".to_string(),
                "ATDMA".to_string(),
                channel_id.to_string(),
                "5120 kSym/s".to_string(),
                format!("{} Hz", frequency_hz),
                format!("{} dBmV", power_dbmv),
            ],
        }
    }

    /// Replaces the text of one cell.
    pub fn set(mut self, index: usize, text: &str) -> Self {
        self.cells[index] = text.to_string();
        self
    }

    /// Drops every cell from `len` onwards.
    pub fn truncate(mut self, len: usize) -> Self {
        self.cells.truncate(len);
        self
    }

    fn to_html(&self) -> String {
        let cells: String = self
            .cells
            .iter()
            .map(|text| format!("<td>{}</td>", text))
            .collect();
        format!("<tr>{}</tr>", cells)
    }
}

#[derive(Debug, Clone)]
enum Row {
    Data(TableRow),
    Footer(String),
}

impl Row {
    fn to_html(&self, columns: usize) -> String {
        match self {
            Row::Data(row) => row.to_html(),
            Row::Footer(text) => format!(r#"<tr><th colspan="{}">{}</th></tr>"#, columns, text),
        }
    }
}

/// Builder for status page test documents with a fluent API.
#[derive(Debug, Clone)]
pub struct StatusPageBuilder {
    downstream: Vec<Row>,
    upstream: Vec<Row>,
    upstream_table: bool,
}

impl StatusPageBuilder {
    /// Creates a builder whose channel tables have headers but no data rows.
    pub fn new() -> Self {
        Self {
            downstream: Vec::new(),
            upstream: Vec::new(),
            upstream_table: true,
        }
    }

    /// Appends a downstream data row.
    pub fn downstream(mut self, row: TableRow) -> Self {
        self.downstream.push(Row::Data(row));
        self
    }

    /// Appends a downstream row made of a single `th` cell.
    pub fn downstream_footer(mut self, text: &str) -> Self {
        self.downstream.push(Row::Footer(text.to_string()));
        self
    }

    /// Appends an upstream data row.
    pub fn upstream(mut self, row: TableRow) -> Self {
        self.upstream.push(Row::Data(row));
        self
    }

    /// Leaves the upstream table out of the page entirely.
    pub fn without_upstream_table(mut self) -> Self {
        self.upstream_table = false;
        self
    }

    /// Builds the HTML string.
    pub fn build(self) -> String {
        let mut html = String::from(
            r#"<!DOCTYPE html><html><head><title>Status</title></head><body>"#,
        );
        html.push_str(
            r#"<table><tr><th colspan="3"><strong>Startup Procedure</strong></th></tr>
               <tr><td><strong>Procedure</strong></td><td><strong>Status</strong></td><td><strong>Comment</strong></td></tr>
               <tr><td>Acquire Downstream Channel</td><td>609000000 Hz</td><td>Locked</td></tr>
               <tr><td>Connectivity State</td><td>OK</td><td>Operational</td></tr></table>"#,
        );
        html.push_str(
            r#"<table><tr><td>Security</td><td>Enabled</td><td>BPI+</td></tr></table>"#,
        );
        html.push_str(&channel_table(
            "Downstream Bonded Channels",
            &DOWNSTREAM_HEADERS,
            &self.downstream,
        ));
        if self.upstream_table {
            html.push_str(&channel_table(
                "Upstream Bonded Channels",
                &UPSTREAM_HEADERS,
                &self.upstream,
            ));
        }
        html.push_str("<p>Current System Time: Mon Jan 01 12:00:00 2024</p></body></html>");
        html
    }
}

impl Default for StatusPageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn channel_table(title: &str, headers: &[&str], rows: &[Row]) -> String {
    let header_cells: String = headers
        .iter()
        .map(|h| format!("<td><strong>{}</strong></td>", h))
        .collect();
    let body: String = rows.iter().map(|row| row.to_html(headers.len())).collect();
    format!(
        r#"<table><tbody><tr><th colspan="{}"><strong>{}</strong></th></tr><tr>{}</tr>{}</tbody></table>"#,
        headers.len(),
        title,
        header_cells,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_page_has_four_tables() {
        let html = Html::parse_document(&StatusPageBuilder::new().build());
        let selector = Selector::parse("table").unwrap();
        assert_eq!(html.select(&selector).count(), 4);
    }

    #[test]
    fn test_page_without_upstream_has_three_tables() {
        let html = Html::parse_document(&StatusPageBuilder::new().without_upstream_table().build());
        let selector = Selector::parse("table").unwrap();
        assert_eq!(html.select(&selector).count(), 3);
    }

    #[test]
    fn test_row_cells() {
        let row = TableRow::downstream(1, 5, 609000000, 3.1, 38.5, 12, 0);
        assert_eq!(row.cells.len(), 9);
        assert_eq!(row.cells[4], "609000000 Hz");
        assert_eq!(row.cells[5], "3.1 dBmV");
        assert_eq!(row.cells[6], "38.5 dB");

        let row = TableRow::upstream(1, 2, 30600000, 45.3);
        assert_eq!(row.cells.len(), 7);
        assert_eq!(row.cells[5], "30600000 Hz");
        assert_eq!(row.cells[6], "45.3 dBmV");
    }
}
