//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, reproducible draws.
//! Every face drawn by a die goes through this module.

mod xorshift;

pub use xorshift::DiceRng;
