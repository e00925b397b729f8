pub mod familiarity;
pub mod persona;
pub mod style;
