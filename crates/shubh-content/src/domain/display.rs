//! Display-time resolution of a saved content record.
//!
//! Fallbacks are applied here and only here: the stored record keeps exactly
//! what the organizer typed.

use serde::Serialize;

use super::record::ContentRecord;
use super::schema::{Fallback, schema_for};

/// Invitation- and event-level values that per-type fields fall back to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedSchedule {
    /// The invitation's main date.
    pub main_date: Option<String>,
    /// The event's start time.
    pub start_time: Option<String>,
}

impl SharedSchedule {
    fn resolve(&self, fallback: Fallback) -> &str {
        let value = match fallback {
            Fallback::MainDate => self.main_date.as_deref(),
            Fallback::StartTime => self.start_time.as_deref(),
        };
        value.unwrap_or_default()
    }
}

/// One labelled value ready for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    /// Storage key.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Resolved value; `""` when neither the record nor the fallback has one.
    pub value: String,
    /// Whether `value` came from the shared schedule.
    pub from_fallback: bool,
}

/// The active variant of a record, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentDisplay {
    /// Raw type tag.
    pub event_type: String,
    /// Section heading; `None` for unrecognized types.
    pub section_title: Option<&'static str>,
    /// Entries in schema order, derived slots last.
    pub entries: Vec<DisplayEntry>,
}

impl ContentDisplay {
    /// The resolved value of `name`, or `""`.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map_or("", |e| e.value.as_str())
    }
}

fn entry(
    record: &ContentRecord,
    schedule: &SharedSchedule,
    name: &'static str,
    label: &'static str,
    fallback: Option<Fallback>,
) -> DisplayEntry {
    match fallback {
        Some(fallback) if !record.is_set(name) => {
            let value = schedule.resolve(fallback);
            DisplayEntry {
                name,
                label,
                value: value.to_owned(),
                from_fallback: !value.is_empty(),
            }
        }
        _ => DisplayEntry {
            name,
            label,
            value: record.value_or_empty(name).to_owned(),
            from_fallback: false,
        },
    }
}

/// Resolves the active variant of `record` against `schedule`.
///
/// Keys outside the active schema are never rendered. An unrecognized type,
/// or an empty record, resolves to a display with no entries.
#[must_use]
pub fn resolve_display(record: &ContentRecord, schedule: &SharedSchedule) -> ContentDisplay {
    let Some(schema) = schema_for(record.event_type()) else {
        return ContentDisplay {
            event_type: record.event_type().to_owned(),
            section_title: None,
            entries: Vec::new(),
        };
    };

    let fields = schema
        .fields
        .iter()
        .map(|f| entry(record, schedule, f.name, f.label, f.fallback));
    let derived = schema
        .derived
        .iter()
        .map(|d| entry(record, schedule, d.name, d.label, Some(d.fallback)));

    ContentDisplay {
        event_type: record.event_type().to_owned(),
        section_title: Some(schema.section_title),
        entries: fields.chain(derived).collect(),
    }
}
