pub mod profile;
pub mod session;

pub use profile::{PersonaProfile, PersonaVariant};
pub use session::{PersonaSession, Turn, TurnOutcome};
