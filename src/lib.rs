#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

//! `Pod042`: deterministic persona styling for language-model output.
//!
//! Raw model text flows through a rule-based pipeline:
//!
//! ```text
//! classify ─▶ transform ─▶ extract_annotation ─▶ assemble ─▶ (level ≥ 3.0) overlay
//! ```
//!
//! A [`FamiliarityState`] is updated once per completed turn, out of band, and
//! only consulted by the overlay step. [`PersonaSession`] threads both together
//! for one conversation.

pub mod config;
pub mod core;
pub mod error;

pub use config::Config;
pub use crate::core::familiarity::{FamiliarityState, Phase, apply_overlay};
pub use crate::core::persona::{PersonaProfile, PersonaSession, PersonaVariant};
pub use crate::core::style::{
    Category, FormattedResponse, StylePipeline, assemble, classify, extract_annotation, transform,
};
pub use error::{PodError, StyleError};
