//! Monte Carlo Dice Core - Rust Engine
//!
//! Weighted dice, games that roll several dice together, and descriptive
//! statistics over the results.
//!
//! # Architecture
//!
//! - **models**: Domain types (Die, Game, result tables)
//! - **analysis**: Analyzer computing face counts, jackpots and combinations
//! - **rng**: Deterministic random number generation
//! - **checkpoint**: Save/restore a game as JSON
//! - **config**: JSON game configuration
//!
//! # Critical Invariants
//!
//! 1. A die's face set never changes after construction
//! 2. All randomness goes through a seedable `DiceRng`
//! 3. A game keeps only the results of its most recent play

// Module declarations
pub mod analysis;
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use analysis::{Analyzer, ComboResults, FaceCounts, JackpotResults};
pub use checkpoint::{DieSnapshot, GameSnapshot};
pub use config::{DieConfig, GameConfig, WeightValue};
pub use error::MonteCarloError;
pub use models::{
    die::{Die, IntoWeight},
    face::{Face, FaceValue},
    game::Game,
    results::{GameResults, NarrowResults, ResultForm, WideResults},
};
pub use rng::DiceRng;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn montecarlo_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::dice::PyDie>()?;
    m.add_class::<ffi::dice::PyGame>()?;
    m.add_class::<ffi::analyzer::PyAnalyzer>()?;
    Ok(())
}
