//! Extraction of channel points from the modem status page.
//!
//! The page is treated as one atomic unit: any missing table, row or cell, or
//! any value that does not coerce, fails the whole extraction and no points
//! are returned.

use chrono::{DateTime, SubsecRound, Utc};
use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;
use crate::model::{Measurement, Point};
use crate::modem::helper::{element_text, html_selector, is_header_row, strip_unit};
use crate::modem::layout::{StatusPageLayout, TableLayout};
use crate::modem::parser_traits::ContextualHtmlParser;

/// Parser turning a status page into downstream and upstream points.
#[derive(Debug, Clone, Default)]
pub struct StatusPageParser {
    layout: StatusPageLayout,
}

impl StatusPageParser {
    /// Creates a parser for the SB6183 page layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser for a custom page layout.
    #[cfg(test)]
    pub fn with_layout(layout: StatusPageLayout) -> Self {
        Self { layout }
    }
}

impl ContextualHtmlParser for StatusPageParser {
    type Output = Vec<Point>;
    type Context = DateTime<Utc>;

    /// Extracts the points of every table in the layout, in layout order.
    ///
    /// The timestamp is truncated to whole seconds and shared by every point.
    fn parse_with_context(
        &self,
        document: &Html,
        timestamp: DateTime<Utc>,
    ) -> Result<Vec<Point>, ParseError> {
        let timestamp = timestamp.trunc_subsecs(0);
        let selectors = TableSelectors::new()?;
        let tables: Vec<ElementRef> = document.select(&selectors.table).collect();

        let mut points = Vec::new();
        for layout in &self.layout.tables {
            let table = tables.get(layout.table_index).ok_or_else(|| {
                ParseError::table_not_found(layout.direction, layout.table_index, tables.len())
            })?;
            points.extend(parse_table(table, layout, &selectors, timestamp)?);
        }

        Ok(points)
    }
}

struct TableSelectors {
    table: Selector,
    row: Selector,
    data_cell: Selector,
    any_cell: Selector,
}

impl TableSelectors {
    fn new() -> Result<Self, ParseError> {
        Ok(Self {
            table: html_selector("table")?,
            row: html_selector("tr")?,
            data_cell: html_selector("td")?,
            any_cell: html_selector("td, th")?,
        })
    }
}

/// Parses the data rows of one channel table.
///
/// Row numbers in errors are 1-based and count every `tr` of the table,
/// header rows included.
fn parse_table(
    table: &ElementRef,
    layout: &TableLayout,
    selectors: &TableSelectors,
    timestamp: DateTime<Utc>,
) -> Result<Vec<Point>, ParseError> {
    let rows: Vec<ElementRef> = table.select(&selectors.row).collect();
    if rows.len() < layout.header_rows {
        return Err(ParseError::missing_header_rows(
            layout.direction,
            layout.header_rows,
            rows.len(),
        ));
    }

    let mut points = Vec::with_capacity(rows.len() - layout.header_rows);
    for (offset, row) in rows.iter().enumerate().skip(layout.header_rows) {
        if is_header_row(row, &selectors.any_cell) {
            continue;
        }
        let row_number = offset + 1;
        let cells: Vec<String> = row
            .select(&selectors.data_cell)
            .map(|cell| element_text(&cell))
            .collect();
        points.push(parse_row(&cells, row_number, layout, timestamp)?);
    }

    tracing::debug!(
        "Parsed {} {} channels from table #{}",
        points.len(),
        layout.direction,
        layout.table_index
    );
    Ok(points)
}

fn parse_row(
    cells: &[String],
    row_number: usize,
    layout: &TableLayout,
    timestamp: DateTime<Utc>,
) -> Result<Point, ParseError> {
    let channel_text = cell_at(cells, layout.channel_column, "channel", row_number, layout)?;
    let channel = channel_text.parse::<i64>().map_err(|e| {
        ParseError::number_parse(layout.direction, row_number, "channel", channel_text, e)
    })?;

    let mut builder = Point::builder(Measurement::CableModem, timestamp)
        .tag("channel", channel)
        .tag("direction", layout.direction);

    for column in &layout.columns {
        let raw = cell_at(cells, column.index, column.field, row_number, layout)?;
        let text = strip_unit(raw, column.unit);
        let value = column.coerce(text).map_err(|e| {
            ParseError::number_parse(layout.direction, row_number, column.field, text, e)
        })?;
        builder = builder.field(column.field, value);
    }

    Ok(builder.build())
}

fn cell_at<'a>(
    cells: &'a [String],
    index: usize,
    field: &str,
    row_number: usize,
    layout: &TableLayout,
) -> Result<&'a str, ParseError> {
    cells.get(index).map(String::as_str).ok_or_else(|| {
        ParseError::cell_not_found(layout.direction, row_number, index, field, cells.len())
    })
}

/// Extracts SB6183 channel points from a parsed status page.
pub fn extract_points(document: &Html, timestamp: DateTime<Utc>) -> Result<Vec<Point>, ParseError> {
    StatusPageParser::new().parse_with_context(document, timestamp)
}

/// Parses raw status page HTML and extracts its channel points.
///
/// The parsed document never outlives this call, which keeps callers in
/// async code free of the non-`Send` [`Html`] tree.
pub fn parse_status_page(body: &str, timestamp: DateTime<Utc>) -> Result<Vec<Point>, ParseError> {
    let document = Html::parse_document(body);
    extract_points(&document, timestamp)
}
