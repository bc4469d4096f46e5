//! Weighted die model
//!
//! A die has a fixed, ordered set of distinct faces and one non-negative
//! weight per face. Weights start at 1.0 and can be changed one face at a
//! time; the face set never changes after construction.

use crate::checkpoint::DieSnapshot;
use crate::error::{MonteCarloError, Result};
use crate::models::face::Face;
use crate::rng::DiceRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Weight every face receives at construction
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A value accepted as a face weight
///
/// Numbers are taken as-is; strings must parse as a number
/// (`"2"` becomes `2.0`). Validation of the resulting value happens in
/// [`Die::change_weight`].
pub trait IntoWeight {
    fn into_weight(self) -> Result<f64>;
}

impl IntoWeight for f64 {
    fn into_weight(self) -> Result<f64> {
        Ok(self)
    }
}

impl IntoWeight for f32 {
    fn into_weight(self) -> Result<f64> {
        Ok(self as f64)
    }
}

impl IntoWeight for i32 {
    fn into_weight(self) -> Result<f64> {
        Ok(self as f64)
    }
}

impl IntoWeight for i64 {
    fn into_weight(self) -> Result<f64> {
        Ok(self as f64)
    }
}

impl IntoWeight for u32 {
    fn into_weight(self) -> Result<f64> {
        Ok(self as f64)
    }
}

impl IntoWeight for &str {
    fn into_weight(self) -> Result<f64> {
        self.trim().parse::<f64>().map_err(|_| {
            MonteCarloError::InvalidWeight(format!("'{}' is not a number", self))
        })
    }
}

impl IntoWeight for String {
    fn into_weight(self) -> Result<f64> {
        self.as_str().into_weight()
    }
}

impl IntoWeight for &String {
    fn into_weight(self) -> Result<f64> {
        self.as_str().into_weight()
    }
}

/// A die with weighted faces
///
/// # Example
/// ```
/// use montecarlo_core_rs::{Die, DiceRng};
///
/// let mut die = Die::new(vec!["a", "b", "c", "d"]).unwrap();
/// die.change_weight(&"b", "2").unwrap();
/// assert_eq!(die.weight(&"b"), Some(2.0));
///
/// let mut rng = DiceRng::new(42);
/// let rolls = die.roll(5, &mut rng).unwrap();
/// assert_eq!(rolls.len(), 5);
/// ```
///
/// Deserializing goes through the same checks as [`Die::new`] and
/// [`Die::change_weight`], so duplicate faces or negative weights are
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "DieSnapshot<F>",
    bound(deserialize = "F: Face + serde::de::DeserializeOwned")
)]
pub struct Die<F> {
    /// Faces in construction order
    faces: Vec<F>,

    /// Weight of `faces[i]` at index `i`
    weights: Vec<f64>,
}

impl<F: Face> Die<F> {
    /// Create a die with every weight set to 1.0
    ///
    /// # Errors
    /// `InvalidArgument` if `faces` is empty or contains duplicates.
    pub fn new(faces: Vec<F>) -> Result<Self> {
        if faces.is_empty() {
            return Err(MonteCarloError::InvalidArgument(
                "a die needs at least one face".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(faces.len());
        for face in &faces {
            if !seen.insert(face) {
                return Err(MonteCarloError::InvalidArgument(format!(
                    "duplicate face {:?}",
                    face
                )));
            }
        }

        let weights = vec![DEFAULT_WEIGHT; faces.len()];
        Ok(Self { faces, weights })
    }

    /// Rebuild a die from faces and explicit weights (used by checkpoints).
    pub(crate) fn from_parts(faces: Vec<F>, weights: Vec<f64>) -> Result<Self> {
        if faces.len() != weights.len() {
            return Err(MonteCarloError::InvalidArgument(format!(
                "{} faces but {} weights",
                faces.len(),
                weights.len()
            )));
        }
        let mut die = Self::new(faces)?;
        for (idx, weight) in weights.into_iter().enumerate() {
            die.weights[idx] = validate_weight(weight)?;
        }
        Ok(die)
    }

    /// Replace the weight of a single face
    ///
    /// # Errors
    /// - `UnknownFace` if `face` is not on this die
    /// - `InvalidWeight` if the weight is non-numeric, negative, NaN or infinite
    pub fn change_weight<W: IntoWeight>(&mut self, face: &F, weight: W) -> Result<()> {
        let idx = self
            .position(face)
            .ok_or_else(|| MonteCarloError::UnknownFace(format!("{:?}", face)))?;
        let weight = validate_weight(weight.into_weight()?)?;

        log::trace!("weight of face {:?} changed to {}", face, weight);
        self.weights[idx] = weight;
        Ok(())
    }

    /// Roll the die `n_rolls` times with replacement
    ///
    /// Each draw picks face `f` with probability `weight(f) / sum(weights)`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `n_rolls` is zero
    /// - `InvalidWeight` if every weight is zero
    pub fn roll(&self, n_rolls: usize, rng: &mut DiceRng) -> Result<Vec<F>> {
        if n_rolls == 0 {
            return Err(MonteCarloError::InvalidArgument(
                "number of rolls must be at least 1".to_string(),
            ));
        }
        if self.weights.iter().all(|&w| w == 0.0) {
            return Err(MonteCarloError::InvalidWeight(
                "cannot roll a die whose weights are all zero".to_string(),
            ));
        }

        let mut outcomes = Vec::with_capacity(n_rolls);
        for _ in 0..n_rolls {
            let idx = rng.weighted_index(&self.weights).ok_or_else(|| {
                MonteCarloError::InvalidWeight("die has no positive weight".to_string())
            })?;
            outcomes.push(self.faces[idx].clone());
        }
        Ok(outcomes)
    }

    /// Roll once
    pub fn roll_once(&self, rng: &mut DiceRng) -> Result<F> {
        let mut outcome = self.roll(1, rng)?;
        Ok(outcome.remove(0))
    }

    /// Current faces and weights in construction order, shape (faces, 2)
    pub fn snapshot(&self) -> Vec<(F, f64)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }

    pub fn faces(&self) -> &[F] {
        &self.faces
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight of `face`, or `None` if the die does not have it
    pub fn weight(&self, face: &F) -> Option<f64> {
        self.position(face).map(|idx| self.weights[idx])
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Sum of all weights; overflows to infinity for weights near `f64::MAX`
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Probability of drawing `face` under the current weights
    pub fn probability(&self, face: &F) -> Option<f64> {
        let max = self.weights.iter().copied().fold(0.0, f64::max);
        if max <= 0.0 {
            return None;
        }
        let total: f64 = self.weights.iter().map(|&w| w / max).sum();
        self.weight(face).map(|w| (w / max) / total)
    }

    fn position(&self, face: &F) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }
}

fn validate_weight(weight: f64) -> Result<f64> {
    if !weight.is_finite() {
        return Err(MonteCarloError::InvalidWeight(format!(
            "{} is not a finite number",
            weight
        )));
    }
    if weight < 0.0 {
        return Err(MonteCarloError::InvalidWeight(format!(
            "{} is negative",
            weight
        )));
    }
    Ok(weight)
}
