//! Game configuration
//!
//! Describes a game as data so it can be read from JSON:
//!
//! ```json
//! {
//!   "seed": 42,
//!   "rolls": 20,
//!   "form": "wide",
//!   "dice": [
//!     { "faces": ["a", "b", "c", "d"] },
//!     { "faces": ["a", "b", "c", "d"], "weights": { "b": 2.0 } }
//!   ]
//! }
//! ```
//!
//! - `seed`: optional; rolls are seeded from entropy when absent
//! - `rolls`: number of rolls per play, at least 1
//! - `form`: `"wide"` or `"narrow"`; `"wide"` when absent
//! - `weights`: optional face → weight overrides; values may be numbers or
//!   numeric strings

use crate::error::{MonteCarloError, Result};
use crate::models::{Die, FaceValue, Game, ResultForm};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for a whole game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub seed: Option<u64>,

    pub rolls: usize,

    #[serde(default = "default_form")]
    pub form: ResultForm,

    pub dice: Vec<DieConfig>,
}

/// Configuration for one die
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieConfig {
    pub faces: Vec<FaceValue>,

    /// Weight overrides keyed by the face's display form
    #[serde(default)]
    pub weights: BTreeMap<String, WeightValue>,
}

/// A weight as written in a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightValue {
    Number(f64),
    Text(String),
}

fn default_form() -> ResultForm {
    ResultForm::Wide
}

impl GameConfig {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check values serde cannot: roll count and dice presence
    pub fn validate(&self) -> Result<()> {
        if self.rolls == 0 {
            return Err(MonteCarloError::InvalidArgument(
                "rolls must be at least 1".to_string(),
            ));
        }
        if self.dice.is_empty() {
            return Err(MonteCarloError::InvalidArgument(
                "config must list at least one die".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the configured game (not yet played)
    pub fn build_game(&self) -> Result<Game<FaceValue>> {
        self.validate()?;
        let dice = self
            .dice
            .iter()
            .map(DieConfig::build)
            .collect::<Result<Vec<_>>>()?;

        match self.seed {
            Some(seed) => Game::with_seed(dice, seed),
            None => Game::new(dice),
        }
    }
}

impl DieConfig {
    /// Build the die and apply its weight overrides
    ///
    /// Weight keys are matched against each face's display form, so the key
    /// `"6"` addresses the integer face `6`. A key matching more than one
    /// face (e.g. both `6` and `"6"`) is rejected.
    pub fn build(&self) -> Result<Die<FaceValue>> {
        let mut die = Die::new(self.faces.clone())?;

        for (key, weight) in &self.weights {
            let mut matches = self.faces.iter().filter(|f| f.to_string() == *key);
            let face = matches
                .next()
                .cloned()
                .ok_or_else(|| MonteCarloError::UnknownFace(key.clone()))?;
            if matches.next().is_some() {
                return Err(MonteCarloError::InvalidArgument(format!(
                    "weight key \"{}\" matches more than one face",
                    key
                )));
            }

            match weight {
                WeightValue::Number(w) => die.change_weight(&face, *w)?,
                WeightValue::Text(s) => die.change_weight(&face, s.as_str())?,
            }
        }

        Ok(die)
    }
}
