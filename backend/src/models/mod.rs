//! Domain models: faces, dice, games and their result tables

pub mod die;
pub mod face;
pub mod game;
pub mod results;

// Re-exports
pub use die::{Die, IntoWeight, DEFAULT_WEIGHT};
pub use face::{Face, FaceValue};
pub use game::Game;
pub use results::{GameResults, NarrowResults, NarrowRow, ResultForm, WideResults};
