//! FFI module for Python bindings via PyO3
//!
//! Exposes `Die`, `Game` and `Analyzer` classes. Faces cross the boundary as
//! Python `int` or `str`; errors map to `ValueError` or `RuntimeError`.

pub mod analyzer;
pub mod dice;
pub mod types;
