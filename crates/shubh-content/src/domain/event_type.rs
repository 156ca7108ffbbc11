//! The closed set of ceremony types a content record can describe.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A ceremony category that determines which content fields are relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Ring ceremony.
    Engagement,
    /// Turmeric ceremony.
    Haldi,
    /// Henna ceremony.
    Mehendi,
    /// The wedding itself.
    Marriage,
    /// Post-wedding reception.
    Reception,
}

/// Returned by [`EventType::from_str`] for tags outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized event type: {0}")]
pub struct UnknownEventType(pub String);

impl EventType {
    /// Every recognized event type, in editor order.
    pub const ALL: [EventType; 5] = [
        EventType::Engagement,
        EventType::Haldi,
        EventType::Mehendi,
        EventType::Marriage,
        EventType::Reception,
    ];

    /// The wire tag for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Engagement => "engagement",
            EventType::Haldi => "haldi",
            EventType::Mehendi => "mehendi",
            EventType::Marriage => "marriage",
            EventType::Reception => "reception",
        }
    }

    /// Parses a wire tag, returning `None` for anything unrecognized.
    ///
    /// Unrecognized tags are not errors for the schema engine; callers that
    /// need an error use [`FromStr`] instead.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownEventType(s.to_owned()))
    }
}
