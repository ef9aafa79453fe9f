//! Rendering of extracted points to text.
//!
//! Emitters perform no validation; they format whatever points they are given.

use std::io::Write;

use clap::ValueEnum;

use crate::error::EmitError;
use crate::model::{format_timestamp, Point};

/// Output formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// InfluxDB line protocol, one point per line
    Influx,
    /// A single JSON array of points
    Json,
}

impl OutputFormat {
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Influx => Box::new(LineProtocolRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Trait for types that render a point sequence to an output sink.
pub trait Renderer {
    fn render(&self, points: &[Point], out: &mut dyn Write) -> Result<(), EmitError>;
}

pub struct LineProtocolRenderer;

impl Renderer for LineProtocolRenderer {
    fn render(&self, points: &[Point], out: &mut dyn Write) -> Result<(), EmitError> {
        for point in points {
            writeln!(out, "{}", line_protocol(point))?;
        }
        out.flush()?;
        Ok(())
    }
}

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, points: &[Point], out: &mut dyn Write) -> Result<(), EmitError> {
        serde_json::to_writer(&mut *out, points)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

/// Formats one point as `measurement,tags fields timestamp`.
///
/// Tags and fields appear in insertion order.
pub fn line_protocol(point: &Point) -> String {
    let tags = point
        .tags()
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(",");
    let fields = point
        .fields()
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{},{} {} {}",
        point.measurement(),
        tags,
        fields,
        format_timestamp(&point.timestamp())
    )
}
