//! Positional layout of the modem status page.
//!
//! The SB6183 firmware exposes no ids or classes on its tables, so every value
//! is addressed by the ordinal of its table in the document and the column of
//! its cell in the row. All of those offsets live here.

use crate::model::{Direction, FieldValue, Unit};

/// Numeric type a cell is coerced to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValueKind {
    Integer,
    Float,
}

/// One field read from a fixed column of a data row.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Field name in the emitted point
    pub field: &'static str,
    /// Zero-based offset among the row's `td` cells
    pub index: usize,
    /// Unit suffix stripped before coercion
    pub unit: Option<Unit>,
    pub kind: ValueKind,
}

impl ColumnSpec {
    pub fn integer(field: &'static str, index: usize) -> Self {
        Self {
            field,
            index,
            unit: None,
            kind: ValueKind::Integer,
        }
    }

    pub fn float(field: &'static str, index: usize) -> Self {
        Self {
            field,
            index,
            unit: None,
            kind: ValueKind::Float,
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Coerces unit-stripped cell text to this column's type.
    pub fn coerce(&self, text: &str) -> Result<FieldValue, String> {
        match self.kind {
            ValueKind::Integer => text
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|e| e.to_string()),
            // `parse` accepts "nan" and "inf", neither of which is a reading
            ValueKind::Float => match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(FieldValue::Float(value)),
                Ok(_) => Err("not a finite number".to_string()),
                Err(e) => Err(e.to_string()),
            },
        }
    }
}

/// Layout of one channel table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub direction: Direction,
    /// Zero-based ordinal of the table among all `table` elements
    pub table_index: usize,
    /// Rows skipped unconditionally at the top of the table
    pub header_rows: usize,
    /// Column holding the channel ordinal used as the `channel` tag
    pub channel_column: usize,
    /// Fields in emission order
    pub columns: Vec<ColumnSpec>,
}

impl TableLayout {
    /// Downstream bonded channels: third table on the page.
    pub fn sb6183_downstream() -> Self {
        Self {
            direction: Direction::Downstream,
            table_index: 2,
            header_rows: 2,
            channel_column: 0,
            columns: vec![
                ColumnSpec::integer("channel_id", 3),
                ColumnSpec::integer("frequency", 4).with_unit(Unit::Hertz),
                ColumnSpec::float("power", 5).with_unit(Unit::DecibelMillivolt),
                ColumnSpec::float("snr", 6).with_unit(Unit::Decibel),
                ColumnSpec::integer("corrected", 7),
                ColumnSpec::integer("uncorrectables", 8),
            ],
        }
    }

    /// Upstream bonded channels: fourth table on the page.
    ///
    /// The firmware reports no per-channel SNR upstream, so there is no `snr`
    /// field here.
    pub fn sb6183_upstream() -> Self {
        Self {
            direction: Direction::Upstream,
            table_index: 3,
            header_rows: 2,
            channel_column: 0,
            columns: vec![
                ColumnSpec::integer("channel_id", 3),
                ColumnSpec::integer("frequency", 5).with_unit(Unit::Hertz),
                ColumnSpec::float("power", 6).with_unit(Unit::DecibelMillivolt),
            ],
        }
    }
}

/// The tables of a status page, in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusPageLayout {
    pub tables: Vec<TableLayout>,
}

impl StatusPageLayout {
    /// Arris SB6183 `RgConnect.asp`.
    pub fn sb6183() -> Self {
        Self {
            tables: vec![
                TableLayout::sb6183_downstream(),
                TableLayout::sb6183_upstream(),
            ],
        }
    }
}

impl Default for StatusPageLayout {
    fn default() -> Self {
        Self::sb6183()
    }
}
