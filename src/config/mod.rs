pub mod schema;

pub use schema::{Config, FamiliarityConfig, ObservabilityConfig, PersonaConfig};
