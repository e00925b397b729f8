use serde::{Deserialize, Serialize};

use crate::core::persona::{PersonaProfile, PersonaVariant};

/// Persona settings handed to the surrounding agent-orchestration layer.
/// Read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaConfig {
    #[serde(default)]
    pub variant: PersonaVariant,
    #[serde(default = "default_persona_model")]
    pub model: String,
    /// Overrides the variant's built-in instruction text when set.
    #[serde(default)]
    pub instruction: Option<String>,
}

fn default_persona_model() -> String {
    "gpt-4o-mini".into()
}

impl PersonaConfig {
    pub fn profile(&self) -> PersonaProfile {
        self.variant.profile()
    }

    pub fn effective_instruction(&self) -> String {
        match self.instruction.as_deref().map(str::trim) {
            Some(custom) if !custom.is_empty() => custom.to_string(),
            _ => self.profile().default_instruction(),
        }
    }
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            variant: PersonaVariant::default(),
            model: default_persona_model(),
            instruction: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_config_default() {
        let cfg = PersonaConfig::default();
        assert_eq!(cfg.variant, PersonaVariant::Pod042);
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert!(cfg.instruction.is_none());
    }

    #[test]
    fn test_instruction_override() {
        let mut cfg = PersonaConfig::default();
        assert!(cfg.effective_instruction().contains("ポッド042"));

        cfg.instruction = Some("  ".into());
        assert!(cfg.effective_instruction().contains("ポッド042"));

        cfg.instruction = Some("簡潔に応答する。".into());
        assert_eq!(cfg.effective_instruction(), "簡潔に応答する。");
    }

    #[test]
    fn test_persona_config_toml_roundtrip() {
        let cfg = PersonaConfig {
            variant: PersonaVariant::Pod153,
            ..PersonaConfig::default()
        };
        let serialized = toml::to_string(&cfg).expect("serialize");
        assert!(serialized.contains("variant = \"pod153\""));
        let deserialized: PersonaConfig = toml::from_str(&serialized).expect("deserialize");
        assert_eq!(deserialized.variant, PersonaVariant::Pod153);
    }
}
