//! Result tables produced by playing a game
//!
//! The wide table is the canonical form: one row per roll, one column per
//! die. The narrow table is derived from it on request.

use crate::error::MonteCarloError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout requested from [`crate::Game::results`]
///
/// Accepted string values are `"wide"` and `"narrow"`; there is no default.
///
/// # Example
/// ```
/// use montecarlo_core_rs::ResultForm;
///
/// assert_eq!("narrow".parse::<ResultForm>().unwrap(), ResultForm::Narrow);
/// assert!("tall".parse::<ResultForm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultForm {
    /// Rows = roll number, columns = die number
    Wide,
    /// One row per (roll number, die number) pair, single face column
    Narrow,
}

impl FromStr for ResultForm {
    type Err = MonteCarloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wide" => Ok(ResultForm::Wide),
            "narrow" => Ok(ResultForm::Narrow),
            other => Err(MonteCarloError::InvalidArgument(format!(
                "result form must be \"wide\" or \"narrow\", got \"{}\"",
                other
            ))),
        }
    }
}

impl fmt::Display for ResultForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultForm::Wide => write!(f, "wide"),
            ResultForm::Narrow => write!(f, "narrow"),
        }
    }
}

/// Wide results: `rows[roll][die]` is the face that die showed on that roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WideResults<F> {
    num_dice: usize,
    rows: Vec<Vec<F>>,
}

impl<F: Clone> WideResults<F> {
    /// Assemble a table from one column of outcomes per die.
    ///
    /// All columns must have the same length; the caller guarantees this.
    pub(crate) fn from_columns(columns: Vec<Vec<F>>) -> Self {
        let num_dice = columns.len();
        let num_rolls = columns.first().map_or(0, Vec::len);

        let mut rows: Vec<Vec<F>> = (0..num_rolls)
            .map(|_| Vec::with_capacity(num_dice))
            .collect();
        for column in columns {
            debug_assert_eq!(column.len(), num_rolls);
            for (row, face) in rows.iter_mut().zip(column) {
                row.push(face);
            }
        }

        Self { num_dice, rows }
    }

    /// (number of rolls, number of dice)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.num_dice)
    }

    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    pub fn num_dice(&self) -> usize {
        self.num_dice
    }

    pub fn rows(&self) -> &[Vec<F>] {
        &self.rows
    }

    pub fn row(&self, roll: usize) -> Option<&[F]> {
        self.rows.get(roll).map(Vec::as_slice)
    }

    pub fn get(&self, roll: usize, die: usize) -> Option<&F> {
        self.rows.get(roll).and_then(|row| row.get(die))
    }

    /// Every row has exactly one face per die
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.num_dice)
    }

    /// Every face one die showed, in roll order
    pub fn column(&self, die: usize) -> Option<Vec<&F>> {
        if die >= self.num_dice {
            return None;
        }
        Some(self.rows.iter().map(|row| &row[die]).collect())
    }

    /// Stack into narrow form, roll-major then die-minor
    pub fn to_narrow(&self) -> NarrowResults<F> {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(roll, faces)| {
                faces.iter().enumerate().map(move |(die, face)| NarrowRow {
                    roll,
                    die,
                    face: face.clone(),
                })
            })
            .collect();
        NarrowResults { rows }
    }
}

/// One entry of the narrow table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrowRow<F> {
    pub roll: usize,
    pub die: usize,
    pub face: F,
}

/// Narrow results indexed by (roll number, die number)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrowResults<F> {
    rows: Vec<NarrowRow<F>>,
}

impl<F> NarrowResults<F> {
    /// (rolls × dice, 1)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), 1)
    }

    pub fn rows(&self) -> &[NarrowRow<F>] {
        &self.rows
    }

    /// Face at the given (roll, die) index
    pub fn get(&self, roll: usize, die: usize) -> Option<&F> {
        self.rows
            .iter()
            .find(|r| r.roll == roll && r.die == die)
            .map(|r| &r.face)
    }
}

/// Results in the requested layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum GameResults<F> {
    Wide(WideResults<F>),
    Narrow(NarrowResults<F>),
}

impl<F: Clone> GameResults<F> {
    pub fn shape(&self) -> (usize, usize) {
        match self {
            GameResults::Wide(table) => table.shape(),
            GameResults::Narrow(table) => table.shape(),
        }
    }

    pub fn form(&self) -> ResultForm {
        match self {
            GameResults::Wide(_) => ResultForm::Wide,
            GameResults::Narrow(_) => ResultForm::Narrow,
        }
    }
}
