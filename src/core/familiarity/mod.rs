// Familiarity tracking: per-session relationship state and the overlay it gates.

pub mod overlay;
pub mod state;

pub use overlay::{ExceptionOverlay, apply_overlay};
pub use state::{ADVANCED_PHASE_THRESHOLD, FamiliarityState, LEVEL_CEILING, Phase};
