//! Static field-schema descriptors, one table per event type.
//!
//! The editor, the validator-free update path and the display resolver all
//! dispatch through these tables. Adding an event type means adding a table
//! and a match arm in [`EventType::schema`]; no other branching exists.

use serde::Serialize;

use super::event_type::EventType;

/// Which input widget the editor uses for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldWidget {
    /// Single-line text input.
    Text,
    /// Multi-line text area.
    Multiline,
}

/// A shared field a per-type value falls back to at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// The invitation's main date.
    MainDate,
    /// The event's `start_time`.
    StartTime,
}

/// Descriptor for one editable content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    /// Storage key inside `event_content`.
    pub name: &'static str,
    /// Editor label.
    pub label: &'static str,
    /// Non-binding hint shown while the field is empty.
    pub placeholder: &'static str,
    /// Input widget.
    pub widget: FieldWidget,
    /// Help text under the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
    /// Shared field consulted when this one is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
}

/// A display-only slot that is never edited through the form but is still
/// resolved for the viewer (read from the record if present, else from the
/// shared fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedSlot {
    /// Storage key inside `event_content`.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Shared field consulted when the record has no value.
    pub fallback: Fallback,
}

/// The complete descriptor for one event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventSchema {
    /// Heading of the editor section.
    pub section_title: &'static str,
    /// Editable fields, in form order.
    pub fields: &'static [FieldSchema],
    /// Display-only slots appended after the fields.
    pub derived: &'static [DerivedSlot],
}

impl EventSchema {
    /// Returns the descriptor of `name`, if this schema recognizes it.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether `name` is an editable field of this schema.
    #[must_use]
    pub fn recognizes(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> FieldSchema {
    FieldSchema {
        name,
        label,
        placeholder,
        widget: FieldWidget::Text,
        hint: None,
        fallback: None,
    }
}

const fn multiline(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> FieldSchema {
    FieldSchema {
        name,
        label,
        placeholder,
        widget: FieldWidget::Multiline,
        hint: None,
        fallback: None,
    }
}

const fn hinted(field: FieldSchema, hint: &'static str) -> FieldSchema {
    FieldSchema {
        hint: Some(hint),
        ..field
    }
}

const fn falls_back(field: FieldSchema, fallback: Fallback) -> FieldSchema {
    FieldSchema {
        fallback: Some(fallback),
        ..field
    }
}

static ENGAGEMENT: EventSchema = EventSchema {
    section_title: "Engagement Specific Details",
    fields: &[
        hinted(
            text("couple_names", "Couple Names", "e.g., Rajesh & Priya"),
            "Display couple's names for engagement ceremony",
        ),
        multiline(
            "venue_details",
            "Venue Details",
            "Special venue details or notes",
        ),
    ],
    derived: &[DerivedSlot {
        name: "engagement_date",
        label: "Engagement Date",
        fallback: Fallback::MainDate,
    }],
};

static HALDI: EventSchema = EventSchema {
    section_title: "Haldi Ceremony Details",
    fields: &[
        text("bride_name", "Bride Name", "Bride's name"),
        text("groom_name", "Groom Name", "Groom's name"),
        hinted(
            text("ceremony_time", "Ceremony Time", "e.g., Morning 10 AM onwards"),
            "Specify special timing or duration",
        ),
        text("dress_code", "Dress Code", "e.g., Traditional Yellow Attire"),
    ],
    derived: &[],
};

static MEHENDI: EventSchema = EventSchema {
    section_title: "Mehendi Ceremony Details",
    fields: &[
        text("bride_name", "Bride Name", "Bride's name"),
        falls_back(
            hinted(
                text("mehendi_time", "Mehendi Time", "e.g., Evening 5 PM onwards"),
                "Special timing for mehendi application",
            ),
            Fallback::StartTime,
        ),
        multiline(
            "venue_details",
            "Venue Details",
            "Additional venue information or special notes",
        ),
    ],
    derived: &[],
};

static MARRIAGE: EventSchema = EventSchema {
    section_title: "Marriage Ceremony Details",
    fields: &[
        text("bride_full_name", "Bride's Full Name", "Bride's complete name"),
        text("groom_full_name", "Groom's Full Name", "Groom's complete name"),
        text("bride_parents", "Bride's Parents", "e.g., Mr. & Mrs. Sharma"),
        text("groom_parents", "Groom's Parents", "e.g., Mr. & Mrs. Kumar"),
        text(
            "muhurat_time",
            "Muhurat Time (Auspicious Time)",
            "e.g., 10:30 AM - 11:00 AM",
        ),
        multiline(
            "rituals",
            "Rituals & Customs",
            "Describe special rituals or customs",
        ),
        text("dress_code", "Dress Code", "e.g., Traditional Indian Attire"),
    ],
    derived: &[],
};

static RECEPTION: EventSchema = EventSchema {
    section_title: "Reception Details",
    fields: &[
        text("couple_names", "Couple Names", "e.g., Mr. & Mrs. Kumar"),
        falls_back(
            hinted(
                text("reception_time", "Reception Time", "e.g., Evening 7 PM onwards"),
                "Specify cocktail/dinner timing",
            ),
            Fallback::StartTime,
        ),
        multiline(
            "venue_details",
            "Venue Details",
            "Additional venue information (parking, dress code, etc.)",
        ),
    ],
    derived: &[],
};

impl EventType {
    /// The static schema for this event type.
    #[must_use]
    pub fn schema(self) -> &'static EventSchema {
        match self {
            EventType::Engagement => &ENGAGEMENT,
            EventType::Haldi => &HALDI,
            EventType::Mehendi => &MEHENDI,
            EventType::Marriage => &MARRIAGE,
            EventType::Reception => &RECEPTION,
        }
    }
}

/// Looks up the schema for a raw wire tag; `None` for unrecognized tags.
#[must_use]
pub fn schema_for(event_type: &str) -> Option<&'static EventSchema> {
    EventType::parse(event_type).map(EventType::schema)
}

/// Ordered editable fields for a raw wire tag.
///
/// Unrecognized tags yield an empty slice, never an error.
#[must_use]
pub fn fields_for(event_type: &str) -> &'static [FieldSchema] {
    match schema_for(event_type) {
        Some(schema) => schema.fields,
        None => &[],
    }
}
