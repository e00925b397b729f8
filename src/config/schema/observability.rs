use serde::{Deserialize, Serialize};
use tracing::Level;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// "error" | "warn" | "info" | "debug" | "trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl ObservabilityConfig {
    /// Parsed log level, or `None` when `log_level` is not a level name.
    ///
    /// Callers pick the fallback; this runs before any subscriber exists, so
    /// it cannot report the problem itself.
    pub fn level(&self) -> Option<Level> {
        self.log_level.trim().parse().ok()
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}
