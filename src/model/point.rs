use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;
use serde_derive::Serialize;
use std::fmt;

use super::types::{Direction, Measurement};

/// A tag value: channel ordinals are integers, everything else is text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Int(i64),
    Str(String),
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TagValue::Int(v) => write!(f, "{}", v),
            TagValue::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        TagValue::Int(value)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Str(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Str(value)
    }
}

impl From<Direction> for TagValue {
    fn from(value: Direction) -> Self {
        TagValue::Str(value.to_string())
    }
}

/// A numeric field value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            // Debug keeps the fractional part on whole floats ("3.0", not "3")
            FieldValue::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

/// Insertion-ordered string-keyed map.
///
/// Serializes as a JSON object whose keys keep the order they were added in.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

pub type Tags = OrderedMap<TagValue>;
pub type Fields = OrderedMap<FieldValue>;

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: serde::Serialize> serde::Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

/// One measurement of one channel at one poll instant.
///
/// Points are built with [`Point::builder`] and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    #[serde(serialize_with = "serialize_display")]
    measurement: Measurement,
    #[serde(rename = "time", serialize_with = "serialize_rfc3339")]
    timestamp: DateTime<Utc>,
    fields: Fields,
    tags: Tags,
}

impl Point {
    pub fn builder(measurement: Measurement, timestamp: DateTime<Utc>) -> PointBuilder {
        PointBuilder {
            measurement,
            timestamp,
            tags: Tags::new(),
            fields: Fields::new(),
        }
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

/// Fluent builder for [`Point`].
#[derive(Debug)]
pub struct PointBuilder {
    measurement: Measurement,
    timestamp: DateTime<Utc>,
    tags: Tags,
    fields: Fields,
}

impl PointBuilder {
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.tags.insert(key, value.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key, value.into());
        self
    }

    pub fn build(self) -> Point {
        Point {
            measurement: self.measurement,
            timestamp: self.timestamp,
            tags: self.tags,
            fields: self.fields,
        }
    }
}

/// Formats a timestamp as RFC 3339 with second precision and a `Z` suffix.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_rfc3339<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(timestamp))
}

fn serialize_display<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
