//! Image record model.
//!
//! The API returns loosely typed JSON objects. [`ImageRecord`] keeps a minimal
//! structural contract on top of them: an identifier is required, a preview URL
//! is optional, and every other primitive field is kept in an ordered map of
//! [`FieldValue`]s. Nested objects, arrays and nulls are dropped at decode time
//! so sorting and display only ever see primitives.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// JSON key holding the record identifier.
pub const ID_FIELD: &str = "id";

/// JSON key holding the preview image location.
pub const PREVIEW_FIELD: &str = "previewURL";

/// Identifier of a record, unique within one result set.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageId {
    /// Numeric identifier (the common case).
    Number(f64),
    /// Textual identifier.
    Text(String),
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", FieldValue::Number(*n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A primitive field value carried through from the API.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Any JSON number.
    Number(f64),
    /// A JSON string that is not a timestamp.
    Text(String),
    /// A JSON string in RFC 3339 form.
    Timestamp(DateTime<FixedOffset>),
    /// A JSON boolean.
    Bool(bool),
}

impl FieldValue {
    /// Converts a JSON value, returning `None` for non-primitives.
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => Some(
                DateTime::parse_from_rfc3339(s)
                    .map_or_else(|_| Self::Text(s.clone()), Self::Timestamp),
            ),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Short type label used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Timestamp(_) => "timestamp",
            Self::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for FieldValue {
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M")),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Why a JSON value could not become an [`ImageRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRejection {
    /// The value was not a JSON object.
    NotAnObject,
    /// The object had no usable `id`.
    MissingId,
}

/// One image returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Record identifier.
    pub id: ImageId,
    /// Location of the preview image, if the API sent one.
    pub preview_url: Option<String>,
    /// Remaining primitive fields keyed by their JSON name.
    pub fields: BTreeMap<String, FieldValue>,
}

impl ImageRecord {
    /// Decodes a record from one element of the API's JSON array.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordRejection`] if the value is not an object or lacks a
    /// numeric or textual `id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zgallery::domain::{ImageRecord, FieldValue};
    ///
    /// let json = serde_json::json!({"id": 7, "views": 120, "previewURL": "https://x/7.jpg"});
    /// let record = ImageRecord::from_json(&json).unwrap();
    /// assert_eq!(record.preview_url.as_deref(), Some("https://x/7.jpg"));
    /// assert_eq!(record.field("views"), Some(FieldValue::Number(120.0)));
    /// ```
    pub fn from_json(value: &Value) -> std::result::Result<Self, RecordRejection> {
        let object = value.as_object().ok_or(RecordRejection::NotAnObject)?;
        Self::from_object(object)
    }

    fn from_object(object: &Map<String, Value>) -> std::result::Result<Self, RecordRejection> {
        let id = match object.get(ID_FIELD) {
            Some(Value::Number(n)) => n.as_f64().map(ImageId::Number),
            Some(Value::String(s)) if !s.is_empty() => Some(ImageId::Text(s.clone())),
            _ => None,
        }
        .ok_or(RecordRejection::MissingId)?;

        let preview_url = object
            .get(PREVIEW_FIELD)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let fields = object
            .iter()
            .filter(|(key, _)| key.as_str() != ID_FIELD && key.as_str() != PREVIEW_FIELD)
            .filter_map(|(key, value)| FieldValue::from_json(value).map(|v| (key.clone(), v)))
            .collect();

        Ok(Self {
            id,
            preview_url,
            fields,
        })
    }

    /// Looks up a field by its JSON name.
    ///
    /// `id` and `previewURL` resolve to the dedicated fields so every key the
    /// API sent can be used for sorting.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            ID_FIELD => Some(match &self.id {
                ImageId::Number(n) => FieldValue::Number(*n),
                ImageId::Text(s) => FieldValue::Text(s.clone()),
            }),
            PREVIEW_FIELD => self.preview_url.clone().map(FieldValue::Text),
            _ => self.fields.get(name).cloned(),
        }
    }

    /// Formats a field for display, using `"N/A"` when it is absent.
    #[must_use]
    pub fn display_field(&self, name: &str) -> String {
        self.field(name)
            .map_or_else(|| "N/A".to_string(), |value| value.to_string())
    }
}
