//! The organizer's in-memory editing session.
//!
//! An [`EditSession`] owns its working copy of a content record exclusively.
//! Every keystroke goes through [`apply_edit`]; nothing is persisted until the
//! caller takes the record out with [`EditSession::into_record`] and hands it
//! to the save command.

use serde::Serialize;

use super::event_type::EventType;
use super::record::{ContentRecord, apply_edit};
use super::schema::{FieldWidget, schema_for};

/// One input of the rendered editor form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorField {
    /// Storage key.
    pub name: &'static str,
    /// Input label.
    pub label: &'static str,
    /// Shown only while `value` is empty; never stored.
    pub placeholder: &'static str,
    /// Input widget.
    pub widget: FieldWidget,
    /// Help text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
    /// Current value; `""` when the field was never written.
    pub value: String,
}

/// The editor form for the active event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorForm {
    /// Active type tag.
    pub event_type: String,
    /// Section heading; `None` for unrecognized types.
    pub section_title: Option<&'static str>,
    /// Inputs in schema order; empty for unrecognized types.
    pub fields: Vec<EditorField>,
}

/// Working copy of one event's content while an organizer edits it.
#[derive(Debug, Clone)]
pub struct EditSession {
    record: ContentRecord,
    dirty: bool,
}

impl EditSession {
    /// Starts editing `record`.
    #[must_use]
    pub fn open(record: ContentRecord) -> Self {
        Self {
            record,
            dirty: false,
        }
    }

    /// Starts editing a fresh record of `event_type`.
    #[must_use]
    pub fn blank(event_type: EventType) -> Self {
        Self::open(ContentRecord::new(event_type.as_str()))
    }

    /// The working copy.
    #[must_use]
    pub fn record(&self) -> &ContentRecord {
        &self.record
    }

    /// Whether anything changed since the session was opened.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Switches the active type. Values typed for other variants stay in the
    /// working copy and reappear when their type is selected again.
    pub fn switch_type(&mut self, event_type: &str) {
        if self.record.event_type() != event_type {
            self.record = self.record.with_event_type(event_type);
            self.dirty = true;
        }
    }

    /// Sets `field` on the active type. Fields outside the active schema and
    /// edits under an unrecognized type leave the working copy unchanged.
    pub fn set_field(&mut self, field: &str, value: &str) {
        let next = apply_edit(self.record.event_type(), &self.record, field, value);
        if next != self.record {
            self.record = next;
            self.dirty = true;
        }
    }

    /// Renders the form for the active type.
    #[must_use]
    pub fn form(&self) -> EditorForm {
        let schema = schema_for(self.record.event_type());
        let fields = schema
            .map(|s| s.fields)
            .unwrap_or_default()
            .iter()
            .map(|f| EditorField {
                name: f.name,
                label: f.label,
                placeholder: f.placeholder,
                widget: f.widget,
                hint: f.hint,
                value: self.record.value_or_empty(f.name).to_owned(),
            })
            .collect();
        EditorForm {
            event_type: self.record.event_type().to_owned(),
            section_title: schema.map(|s| s.section_title),
            fields,
        }
    }

    /// Ends the session and hands the whole record over for saving.
    #[must_use]
    pub fn into_record(self) -> ContentRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(form: &'a EditorForm, name: &str) -> &'a str {
        &form.fields.iter().find(|f| f.name == name).unwrap().value
    }

    #[test]
    fn test_switching_type_away_and_back_keeps_entered_values() {
        // Arrange
        let mut session = EditSession::blank(EventType::Marriage);
        session.set_field("bride_full_name", "Priya Sharma");

        // Act
        session.switch_type("reception");
        let reception_form = session.form();
        session.switch_type("marriage");

        // Assert
        assert!(
            reception_form
                .fields
                .iter()
                .all(|f| f.name != "bride_full_name")
        );
        assert_eq!(value_of(&session.form(), "bride_full_name"), "Priya Sharma");
    }

    #[test]
    fn test_form_shows_empty_values_never_placeholders() {
        let session = EditSession::blank(EventType::Haldi);

        let form = session.form();

        assert_eq!(form.section_title, Some("Haldi Ceremony Details"));
        assert_eq!(form.fields.len(), 4);
        for field in &form.fields {
            assert_eq!(field.value, "");
            assert!(!field.placeholder.is_empty());
        }
    }

    #[test]
    fn test_unknown_type_renders_no_inputs_and_ignores_edits() {
        // Arrange
        let original = ContentRecord::new("sangeet").with_field("couple_names", "A & B");
        let mut session = EditSession::open(original.clone());

        // Act
        session.set_field("couple_names", "C & D");
        let form = session.form();

        // Assert
        assert!(form.fields.is_empty());
        assert_eq!(form.section_title, None);
        assert!(!session.is_dirty());
        assert_eq!(session.into_record(), original);
    }

    #[test]
    fn test_dirty_flag_tracks_real_changes_only() {
        let mut session = EditSession::blank(EventType::Mehendi);
        assert!(!session.is_dirty());

        session.switch_type("mehendi");
        assert!(!session.is_dirty());

        session.set_field("mehendi_time", "Evening 5 PM");
        assert!(session.is_dirty());
    }

    #[test]
    fn test_clearing_a_field_stores_an_empty_string() {
        let mut session = EditSession::blank(EventType::Haldi);
        session.set_field("dress_code", "Yellow");

        session.set_field("dress_code", "");

        let record = session.into_record();
        assert_eq!(record.get("dress_code"), Some(""));
    }
}
