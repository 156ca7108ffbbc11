//! The content record and its single-field update rule.
//!
//! A record is a superset object: it keeps every field ever written, for any
//! event type, and only the active type's schema decides what is editable or
//! rendered. Records are values. Updates return a new record with exactly one
//! field replaced.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::event_type::EventType;
use super::schema::schema_for;

/// Persisted content for one event.
///
/// Interchange shape: `{"event_type": "...", "event_content": {...}, ...}`.
/// Unknown top-level keys are carried in `extra` and written back verbatim;
/// unknown nested keys stay in `event_content` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(default)]
    event_type: String,
    #[serde(default)]
    event_content: Map<String, Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ContentRecord {
    /// An empty record tagged with `event_type`.
    #[must_use]
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            ..Self::default()
        }
    }

    /// Decodes a record from its interchange shape.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `value` is not an object or its
    /// `event_type`/`event_content` have the wrong JSON type.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Encodes the record into its interchange shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = self.extra.clone();
        object.insert("event_type".to_owned(), Value::String(self.event_type.clone()));
        object.insert(
            "event_content".to_owned(),
            Value::Object(self.event_content.clone()),
        );
        Value::Object(object)
    }

    /// The raw type tag, recognized or not.
    #[must_use]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The type tag, if it is one of the recognized event types.
    #[must_use]
    pub fn known_type(&self) -> Option<EventType> {
        EventType::parse(&self.event_type)
    }

    /// The stored string value of `field`. Absent, `null` and non-string
    /// values all read as `None`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.event_content.get(field).and_then(Value::as_str)
    }

    /// The value the editor and viewer show: the stored string or `""`.
    #[must_use]
    pub fn value_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or_default()
    }

    /// Whether `field` holds a non-empty string. Absence and `""` are both
    /// "unset" for display purposes, even though they are stored differently.
    #[must_use]
    pub fn is_set(&self, field: &str) -> bool {
        self.get(field).is_some_and(|v| !v.is_empty())
    }

    /// Whether `field` was ever written (an explicit `""` counts).
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.event_content.contains_key(field)
    }

    /// The nested field map, including keys outside any schema.
    #[must_use]
    pub fn event_content(&self) -> &Map<String, Value> {
        &self.event_content
    }

    /// Top-level keys this version does not interpret.
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Returns a copy with `field` replaced by `value`, regardless of schema.
    #[must_use]
    pub fn with_field(&self, field: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.event_content
            .insert(field.to_owned(), Value::String(value.into()));
        next
    }

    /// Returns a copy re-tagged as `event_type`. Field values of every
    /// variant are kept.
    #[must_use]
    pub fn with_event_type(&self, event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            ..self.clone()
        }
    }
}

/// Applies one editor change: `current` with `field` set to `value`.
///
/// Total for every input. When `event_type` is unrecognized, or `field` is not
/// part of its schema, the edit is ignored and an identical record is
/// returned. The stored value is exactly `value`; an empty string is kept as
/// an explicit empty string rather than removing the key.
#[must_use]
pub fn apply_edit(event_type: &str, current: &ContentRecord, field: &str, value: &str) -> ContentRecord {
    match schema_for(event_type) {
        Some(schema) if schema.recognizes(field) => current.with_field(field, value),
        _ => current.clone(),
    }
}
