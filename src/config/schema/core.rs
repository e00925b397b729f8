use super::{FamiliarityConfig, ObservabilityConfig, PersonaConfig};
use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub persona: PersonaConfig,

    #[serde(default)]
    pub familiarity: FamiliarityConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(".pod042").join("config.toml"),
            persona: PersonaConfig::default(),
            familiarity: FamiliarityConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    /// Load `~/.pod042/config.toml`, writing defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let pod_dir = home.join(".pod042");
        let config_path = pod_dir.join("config.toml");

        if !pod_dir.exists() {
            fs::create_dir_all(&pod_dir).context("Failed to create .pod042 directory")?;
        }

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self {
                config_path,
                ..Self::default()
            };
            config.validate()?;
            config.save()?;
            Ok(config)
        }
    }

    /// Load an explicit config file; `~` is expanded.
    pub fn load_from(path: &Path) -> Result<Self> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let config_path = PathBuf::from(expanded);

        let contents = fs::read_to_string(&config_path).with_context(|| {
            format!("Failed to read config file: {}", config_path.display())
        })?;
        let mut config: Config =
            toml::from_str(&contents).context("Failed to parse config file")?;
        config.config_path = config_path;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(variant) = std::env::var("POD042_VARIANT") {
            match variant.trim().parse() {
                Ok(parsed) => self.persona.variant = parsed,
                Err(_) if variant.trim().is_empty() => {}
                Err(_) => tracing::warn!("Ignoring unknown POD042_VARIANT '{variant}'"),
            }
        }

        if let Ok(model) = std::env::var("POD042_MODEL") {
            if !model.is_empty() {
                self.persona.model = model;
            }
        }

        if let Ok(level) = std::env::var("POD042_LOG_LEVEL") {
            if !level.is_empty() {
                self.observability.log_level = level;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.familiarity
            .validate()
            .context("Invalid [familiarity] section")?;
        if self.persona.model.trim().is_empty() {
            anyhow::bail!("persona.model must not be empty");
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = self.to_toml()?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
