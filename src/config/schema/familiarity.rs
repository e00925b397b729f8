use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Bonus table for the familiarity state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamiliarityConfig {
    #[serde(default = "default_gratitude_bonus")]
    pub gratitude_bonus: f64,
    #[serde(default = "default_affection_bonus")]
    pub affection_bonus: f64,
    #[serde(default = "default_periodic_bonus")]
    pub periodic_bonus: f64,
    /// Every N-th interaction earns `periodic_bonus`.
    #[serde(default = "default_periodic_interval")]
    pub periodic_interval: u64,
    #[serde(default = "default_gratitude_markers")]
    pub gratitude_markers: Vec<String>,
    #[serde(default = "default_reference_markers")]
    pub reference_markers: Vec<String>,
    #[serde(default = "default_affection_markers")]
    pub affection_markers: Vec<String>,
}

fn default_gratitude_bonus() -> f64 {
    0.1
}

fn default_affection_bonus() -> f64 {
    0.3
}

fn default_periodic_bonus() -> f64 {
    0.05
}

fn default_periodic_interval() -> u64 {
    20
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_gratitude_markers() -> Vec<String> {
    strings(&["ありがとう", "ありがと", "感謝", "サンキュー", "thanks", "thank you"])
}

fn default_reference_markers() -> Vec<String> {
    strings(&["ポッド", "pod", "042", "153"])
}

fn default_affection_markers() -> Vec<String> {
    strings(&[
        "好き", "撫で", "なでなで", "抱き", "ぎゅ", "hug", "love",
    ])
}

impl FamiliarityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, bonus) in [
            ("gratitude_bonus", self.gratitude_bonus),
            ("affection_bonus", self.affection_bonus),
            ("periodic_bonus", self.periodic_bonus),
        ] {
            if !bonus.is_finite() || bonus < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "familiarity.{name} must be a non-negative number, got {bonus}"
                )));
            }
        }
        if self.periodic_interval == 0 {
            return Err(ConfigError::Validation(
                "familiarity.periodic_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for FamiliarityConfig {
    fn default() -> Self {
        Self {
            gratitude_bonus: default_gratitude_bonus(),
            affection_bonus: default_affection_bonus(),
            periodic_bonus: default_periodic_bonus(),
            periodic_interval: default_periodic_interval(),
            gratitude_markers: default_gratitude_markers(),
            reference_markers: default_reference_markers(),
            affection_markers: default_affection_markers(),
        }
    }
}
