//! Design identifiers and the theme catalog they resolve against.
//!
//! A design id is opaque to the viewer state machine; only the catalog knows
//! which asset bundle and particle style it stands for.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../../designs.yaml");

/// Opaque theme identifier taken from the route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignId(String);

impl DesignId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ambient particle style drawn behind the content phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleStyle {
    /// Floating oil lamps.
    Diyas,
    /// Falling petals.
    Petals,
    /// Gold sparkles.
    Sparkles,
    /// Paper confetti.
    Confetti,
    /// Drifting dust motes.
    Dust,
    /// No particles.
    None,
}

/// Asset bundle a design id resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeBundle {
    /// Design identifier.
    pub id: DesignId,
    /// Human-readable name.
    pub name: String,
    /// Base path of the theme's static assets.
    pub asset_base: String,
    /// Particle style for the content phase.
    pub particles: ParticleStyle,
}

/// Errors raised while loading a design catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The YAML document is malformed.
    #[error("design catalog is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Two bundles share an id.
    #[error("design catalog lists `{0}` more than once")]
    Duplicate(String),

    /// `default_design` names a bundle that is not listed.
    #[error("default design `{0}` is not in the catalog")]
    MissingDefault(String),
}

#[derive(Deserialize)]
struct CatalogDocument {
    default_design: DesignId,
    designs: Vec<ThemeBundle>,
}

/// The set of known designs. Only built through [`DesignCatalog::from_yaml_str`],
/// so the default design is always one of the listed bundles.
#[derive(Debug, Clone)]
pub struct DesignCatalog {
    designs: Vec<ThemeBundle>,
    default_index: usize,
}

impl DesignCatalog {
    /// Loads the catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded catalog is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Parses and checks a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for malformed YAML, duplicate ids, or a default
    /// design that is not listed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)?;

        let mut seen = HashSet::new();
        for bundle in &document.designs {
            if !seen.insert(bundle.id.as_str()) {
                return Err(CatalogError::Duplicate(bundle.id.to_string()));
            }
        }
        let default_index = document
            .designs
            .iter()
            .position(|b| b.id == document.default_design)
            .ok_or_else(|| CatalogError::MissingDefault(document.default_design.to_string()))?;

        Ok(Self {
            designs: document.designs,
            default_index,
        })
    }

    /// Resolves a design id to its bundle.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&ThemeBundle> {
        self.designs.iter().find(|b| b.id.as_str() == id)
    }

    /// The design used when a profile has no preference.
    #[must_use]
    pub fn default_design(&self) -> &DesignId {
        &self.designs[self.default_index].id
    }

    /// Resolves a stored profile preference, falling back to the default
    /// design when it is missing or unknown.
    #[must_use]
    pub fn preferred(&self, preference: Option<&str>) -> &ThemeBundle {
        preference
            .and_then(|id| self.resolve(id))
            .unwrap_or(&self.designs[self.default_index])
    }

    /// All bundles in catalog order.
    #[must_use]
    pub fn designs(&self) -> &[ThemeBundle] {
        &self.designs
    }
}
