mod core;
mod familiarity;
mod observability;
mod persona;

pub use self::core::Config;
pub use familiarity::FamiliarityConfig;
pub use observability::ObservabilityConfig;
pub use persona::PersonaConfig;
