//! Descriptive statistics over a game's most recent play

pub mod analyzer;
pub mod tables;

pub use analyzer::Analyzer;
pub use tables::{ComboResults, ComboRow, FaceCounts, JackpotResults, JackpotRow};
