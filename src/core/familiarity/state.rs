use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::config::FamiliarityConfig;
use crate::error::SessionError;

/// Upper bound of the familiarity scale.
pub const LEVEL_CEILING: f64 = 5.0;

/// Level at which the exception-style overlay may activate.
pub const ADVANCED_PHASE_THRESHOLD: f64 = 3.0;

static DEFAULT_RULES: LazyLock<FamiliarityConfig> = LazyLock::new(FamiliarityConfig::default);

// Phase: named band of the familiarity level, ordered along the ladder
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Initial,
    Observing,
    Trusting,
    Familiar,
    EmergentAffect,
}

impl Phase {
    /// Half-open bands with boundaries at 1.0, 2.0, 3.0 and 4.0.
    pub fn from_level(level: f64) -> Self {
        if level < 1.0 {
            Self::Initial
        } else if level < 2.0 {
            Self::Observing
        } else if level < 3.0 {
            Self::Trusting
        } else if level < 4.0 {
            Self::Familiar
        } else {
            Self::EmergentAffect
        }
    }
}

/// Relationship depth between the persona and its counterpart.
///
/// Owned by exactly one session. `level` stays within `[0, LEVEL_CEILING]`
/// and, like `interaction_count`, never decreases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FamiliarityRecord")]
pub struct FamiliarityState {
    level: f64,
    interaction_count: u64,
}

/// Unchecked wire shape; only reaches callers through [`FamiliarityState::restore`].
#[derive(Deserialize)]
struct FamiliarityRecord {
    level: f64,
    #[serde(default)]
    interaction_count: u64,
}

impl TryFrom<FamiliarityRecord> for FamiliarityState {
    type Error = SessionError;

    fn try_from(record: FamiliarityRecord) -> Result<Self, Self::Error> {
        Self::restore(record.level, record.interaction_count)
    }
}

impl FamiliarityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a previously recorded state. A level outside
    /// `[0, LEVEL_CEILING]` is rejected rather than clamped, since clamping
    /// would lower it on the next update.
    pub fn restore(level: f64, interaction_count: u64) -> Result<Self, SessionError> {
        if !(0.0..=LEVEL_CEILING).contains(&level) {
            return Err(SessionError::InvalidFamiliarity { level });
        }
        Ok(Self {
            level,
            interaction_count,
        })
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn interaction_count(&self) -> u64 {
        self.interaction_count
    }

    pub fn phase(&self) -> Phase {
        Phase::from_level(self.level)
    }

    pub fn is_advanced_phase(&self) -> bool {
        self.level >= ADVANCED_PHASE_THRESHOLD
    }

    /// Record one completed turn using the default bonus table.
    pub fn update(&mut self, user_message: &str, bot_response: &str) {
        self.update_with(&DEFAULT_RULES, user_message, bot_response);
    }

    /// Record one completed turn. Bonuses are cumulative within a call.
    pub fn update_with(
        &mut self,
        rules: &FamiliarityConfig,
        user_message: &str,
        _bot_response: &str,
    ) {
        let before = self.phase();
        self.interaction_count += 1;

        let message = user_message.to_ascii_lowercase();
        let mut delta: f64 = 0.0;
        if mentions(&message, &rules.gratitude_markers) {
            delta += rules.gratitude_bonus;
        }
        if mentions(&message, &rules.reference_markers)
            && mentions(&message, &rules.affection_markers)
        {
            delta += rules.affection_bonus;
        }
        if rules.periodic_interval > 0 && self.interaction_count % rules.periodic_interval == 0 {
            delta += rules.periodic_bonus;
        }

        self.level = (self.level + delta.max(0.0)).clamp(0.0, LEVEL_CEILING);

        let after = self.phase();
        if after != before {
            tracing::info!(
                from = %before,
                to = %after,
                level = self.level,
                interactions = self.interaction_count,
                "familiarity phase advanced"
            );
        }
    }
}

fn mentions(message: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .filter(|marker| !marker.is_empty())
        .any(|marker| message.contains(&marker.to_ascii_lowercase()))
}
