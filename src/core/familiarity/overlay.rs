use super::state::ADVANCED_PHASE_THRESHOLD;
use crate::core::persona::PersonaProfile;
use crate::core::style::{Category, LABEL_SEPARATOR};

/// Substring marking an advisory response.
const ADVISORY_TRIGGER: &str = "推奨";

/// Exception-path style for advanced familiarity phases.
///
/// Never generates text: it can only append one of the profile's two fixed
/// fragments, and only when a trigger matches the assembled response.
#[derive(Debug, Clone, Copy)]
pub struct ExceptionOverlay {
    profile: PersonaProfile,
}

impl ExceptionOverlay {
    pub fn new(profile: PersonaProfile) -> Self {
        Self { profile }
    }

    pub fn apply(&self, response: &str, level: f64) -> String {
        // NaN compares false both ways; only a real level can be advanced.
        if level.is_nan() || level < ADVANCED_PHASE_THRESHOLD {
            return response.to_string();
        }

        let warning_header = format!("{}{LABEL_SEPARATOR}", Category::Warning.label());
        let fragment = if response.contains(ADVISORY_TRIGGER) {
            self.profile.advisory_fragment
        } else if response.starts_with(&warning_header) {
            self.profile.concern_fragment
        } else {
            return response.to_string();
        };

        tracing::debug!(level, fragment, "exception overlay applied");
        format!("{response}{fragment}")
    }
}

impl Default for ExceptionOverlay {
    fn default() -> Self {
        Self::new(PersonaProfile::default())
    }
}

/// Apply the Pod042 overlay.
pub fn apply_overlay(response: &str, level: f64) -> String {
    ExceptionOverlay::default().apply(response, level)
}
