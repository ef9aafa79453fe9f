//! Helper functions for reading the modem's status tables.
//!
//! This module provides utility functions for:
//! - Building CSS selectors with typed errors
//! - Reading and cleaning cell text
//! - Stripping the unit suffixes the firmware prints after values

use scraper::{ElementRef, Selector};

use crate::error::ParseError;
use crate::model::Unit;

/// Creates a CSS selector from a string.
///
/// This is a wrapper around scraper's Selector::parse that converts
/// parsing errors into [`ParseError::InvalidSelector`].
///
/// # Examples
///
/// Valid selectors:
/// - `"table"` - Element selector
/// - `"td, th"` - Selector list
pub fn html_selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::invalid_selector(selector, e))
}

/// Returns the concatenated text of an element with surrounding whitespace
/// removed.
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Removes a unit suffix from already-trimmed cell text.
///
/// Values without the suffix are returned unchanged, so a cell reading
/// `"609000000"` and one reading `"609000000 Hz"` both yield `"609000000"`.
///
/// # Example
///
/// ```no_run
/// assert_eq!(strip_unit("3.1 dBmV", Some(Unit::DecibelMillivolt)), "3.1");
/// assert_eq!(strip_unit("38.5 dB", Some(Unit::Decibel)), "38.5");
/// assert_eq!(strip_unit("12", None), "12");
/// ```
pub fn strip_unit(text: &str, unit: Option<Unit>) -> &str {
    match unit {
        Some(unit) => text.strip_suffix(unit.suffix()).unwrap_or(text).trim(),
        None => text,
    }
}

/// Whether a table row is a header row, meaning its first cell is a `th`.
pub fn is_header_row(row: &ElementRef, cell_selector: &Selector) -> bool {
    row.select(cell_selector)
        .next()
        .map(|cell| cell.value().name() == "th")
        .unwrap_or(false)
}
