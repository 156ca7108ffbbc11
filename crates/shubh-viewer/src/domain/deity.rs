//! Deity motif selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Devotional overlay shown on the opening reveal and the content header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deity {
    /// Lord Ganesha (the default).
    #[default]
    Ganesha,
    /// Lord Venkateswara.
    Venkateswara,
    /// Lord Shiva.
    Shiva,
    /// No motif.
    None,
}

/// Returned when a deity tag is not one of the known motifs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized deity: {0}")]
pub struct UnknownDeity(pub String);

impl Deity {
    /// The wire tag for this motif.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Deity::Ganesha => "ganesha",
            Deity::Venkateswara => "venkateswara",
            Deity::Shiva => "shiva",
            Deity::None => "none",
        }
    }

    /// Interprets a stored profile preference. Missing or unrecognized tags
    /// fall back to the default motif.
    #[must_use]
    pub fn from_preference(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Deity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Deity {
    type Err = UnknownDeity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ganesha" => Ok(Deity::Ganesha),
            "venkateswara" => Ok(Deity::Venkateswara),
            "shiva" => Ok(Deity::Shiva),
            "none" => Ok(Deity::None),
            other => Err(UnknownDeity(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ganesha() {
        assert_eq!(Deity::default(), Deity::Ganesha);
    }

    #[test]
    fn test_from_str_round_trips_tags() {
        for deity in [Deity::Ganesha, Deity::Venkateswara, Deity::Shiva, Deity::None] {
            assert_eq!(deity.as_str().parse::<Deity>().unwrap(), deity);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(
            "vishnu".parse::<Deity>().unwrap_err(),
            UnknownDeity("vishnu".to_owned())
        );
    }

    #[test]
    fn test_from_preference_falls_back_to_default() {
        assert_eq!(Deity::from_preference(None), Deity::Ganesha);
        assert_eq!(Deity::from_preference(Some("Shiva")), Deity::Ganesha);
        assert_eq!(Deity::from_preference(Some("none")), Deity::None);
    }
}
