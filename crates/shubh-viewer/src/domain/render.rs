//! Render plans: what the viewer mounts in each phase, in mount order.

use serde::Serialize;

use super::deity::Deity;
use super::design::DesignId;
use super::phase::Phase;

/// Where the back-navigation affordance leads.
pub const BACK_TARGET: &str = "/";

/// One visual unit the viewer mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderElement {
    /// The opening reveal.
    OpeningReveal {
        /// Theme.
        design: DesignId,
        /// Motif.
        deity: Deity,
    },
    /// Ambient particle effects behind the content.
    ParticleEffects {
        /// Theme.
        design: DesignId,
    },
    /// The invitation body.
    InvitationContent {
        /// Theme.
        design: DesignId,
        /// Motif.
        deity: Deity,
    },
    /// Returns the viewer to the start screen.
    BackNavigation {
        /// Route to navigate to.
        target: &'static str,
    },
}

/// Elements to mount for `phase`.
///
/// The opening phase mounts the reveal alone. The content phase mounts
/// particles, then content, then back-navigation.
#[must_use]
pub fn render_plan(phase: Phase, design: &DesignId, deity: Deity) -> Vec<RenderElement> {
    match phase {
        Phase::Opening => vec![RenderElement::OpeningReveal {
            design: design.clone(),
            deity,
        }],
        Phase::Content => vec![
            RenderElement::ParticleEffects {
                design: design.clone(),
            },
            RenderElement::InvitationContent {
                design: design.clone(),
                deity,
            },
            RenderElement::BackNavigation {
                target: BACK_TARGET,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_mounts_only_the_reveal() {
        let design = DesignId::new("floral");

        let plan = render_plan(Phase::Opening, &design, Deity::Shiva);

        assert_eq!(
            plan,
            [RenderElement::OpeningReveal {
                design,
                deity: Deity::Shiva
            }]
        );
    }

    #[test]
    fn test_content_mounts_particles_content_then_back_navigation() {
        let design = DesignId::new("floral");

        let plan = render_plan(Phase::Content, &design, Deity::Shiva);

        assert_eq!(
            plan,
            [
                RenderElement::ParticleEffects {
                    design: design.clone()
                },
                RenderElement::InvitationContent {
                    design,
                    deity: Deity::Shiva
                },
                RenderElement::BackNavigation { target: "/" },
            ]
        );
    }

    #[test]
    fn test_elements_serialize_with_kind_tag() {
        let json = serde_json::to_value(RenderElement::BackNavigation { target: "/" }).unwrap();

        assert_eq!(json, serde_json::json!({ "kind": "back_navigation", "target": "/" }));
    }
}
