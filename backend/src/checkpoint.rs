//! Checkpoint - save and restore a game
//!
//! A snapshot captures the dice (faces and weights), the generator state and
//! the latest result table, so a restored game continues with exactly the
//! rolls the original would have produced.
//!
//! The snapshot carries a SHA-256 hash of the dice faces. Restoring fails if
//! the faces no longer match the hash.

use crate::error::{MonteCarloError, Result};
use crate::models::{Die, Face, Game, WideResults};
use crate::rng::DiceRng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot<F> {
    pub dice: Vec<DieSnapshot<F>>,

    /// Generator state at the time of the snapshot
    pub rng_state: u64,

    pub latest_result: Option<WideResults<F>>,

    /// Hex SHA-256 of the dice faces
    pub config_hash: String,
}

/// One die's faces and weights, in construction order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieSnapshot<F> {
    pub faces: Vec<F>,
    pub weights: Vec<f64>,
}

impl<F: Face> From<&Die<F>> for DieSnapshot<F> {
    fn from(die: &Die<F>) -> Self {
        DieSnapshot {
            faces: die.faces().to_vec(),
            weights: die.weights().to_vec(),
        }
    }
}

impl<F: Face> TryFrom<DieSnapshot<F>> for Die<F> {
    type Error = MonteCarloError;

    fn try_from(snapshot: DieSnapshot<F>) -> Result<Self> {
        Die::from_parts(snapshot.faces, snapshot.weights)
    }
}

/// SHA-256 over the JSON encoding of each die's face list
pub fn compute_config_hash<F: Serialize>(dice: &[DieSnapshot<F>]) -> Result<String> {
    let faces: Vec<&Vec<F>> = dice.iter().map(|d| &d.faces).collect();
    let json = serde_json::to_string(&faces)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

impl<F: Face + Serialize> Game<F> {
    /// Capture the full game state
    pub fn snapshot(&self) -> Result<GameSnapshot<F>> {
        let dice: Vec<DieSnapshot<F>> = self.dice().iter().map(DieSnapshot::from).collect();
        let config_hash = compute_config_hash(&dice)?;

        Ok(GameSnapshot {
            dice,
            rng_state: self.rng().state(),
            latest_result: self.wide_results().ok().cloned(),
            config_hash,
        })
    }

    /// Hash identifying this game's dice faces
    pub fn config_hash(&self) -> Result<String> {
        let dice: Vec<DieSnapshot<F>> = self.dice().iter().map(DieSnapshot::from).collect();
        compute_config_hash(&dice)
    }

    /// Serialize the game state to a JSON string
    pub fn save_state(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot()?)?)
    }
}

impl<F: Face + Serialize + DeserializeOwned> Game<F> {
    /// Restore a game from a snapshot
    ///
    /// # Errors
    /// `InvalidArgument` if the faces do not match the recorded hash, a die
    /// is malformed, or the result table does not fit the dice.
    pub fn from_snapshot(snapshot: GameSnapshot<F>) -> Result<Self> {
        let actual = compute_config_hash(&snapshot.dice)?;
        if actual != snapshot.config_hash {
            return Err(MonteCarloError::InvalidArgument(format!(
                "checkpoint config hash mismatch: recorded {}, computed {}",
                snapshot.config_hash, actual
            )));
        }

        let dice = snapshot
            .dice
            .into_iter()
            .map(Die::try_from)
            .collect::<Result<Vec<_>>>()?;

        log::debug!("restored game with {} dice from checkpoint", dice.len());
        Game::from_parts(
            dice,
            DiceRng::from_state(snapshot.rng_state),
            snapshot.latest_result,
        )
    }

    /// Restore a game from a JSON string produced by [`Game::save_state`]
    pub fn load_state(json: &str) -> Result<Self> {
        let snapshot: GameSnapshot<F> = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }
}
