//! Statistics tables computed from a wide result table

use crate::models::{Face, WideResults};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A roll on which every die showed the same face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JackpotRow<F> {
    pub roll: usize,
    pub faces: Vec<F>,
    pub jackpot: bool,
}

/// Jackpot rows of a wide table plus their flag column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JackpotResults<F> {
    num_dice: usize,
    rows: Vec<JackpotRow<F>>,
}

impl<F: Face> JackpotResults<F> {
    /// Keep the rows whose every value equals the row's first value.
    ///
    /// A one-die table is all jackpots since each row trivially agrees.
    pub fn from_wide(table: &WideResults<F>) -> Self {
        let rows = table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, faces)| faces.iter().all(|f| Some(f) == faces.first()))
            .map(|(roll, faces)| JackpotRow {
                roll,
                faces: faces.clone(),
                jackpot: true,
            })
            .collect();
        Self {
            num_dice: table.num_dice(),
            rows,
        }
    }
}

impl<F> JackpotResults<F> {
    /// (jackpot count, dice + 1 flag column)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.num_dice + 1)
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[JackpotRow<F>] {
        &self.rows
    }
}

impl<F: Clone> JackpotResults<F> {
    /// Rows as `(roll, faces, jackpot flag)` tuples
    pub fn to_tuples(&self) -> Vec<(usize, Vec<F>, bool)> {
        self.rows
            .iter()
            .map(|row| (row.roll, row.faces.clone(), row.jackpot))
            .collect()
    }
}

/// One distinct key with the number of rolls that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboRow<F> {
    pub faces: Vec<F>,
    pub count: usize,
}

/// Distinct roll keys ordered by descending count
///
/// Ties keep the order in which keys first appeared in the results.
/// Used for both combinations (sorted keys) and permutations (die order kept).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboResults<F> {
    rows: Vec<ComboRow<F>>,
}

impl<F: Face> ComboResults<F> {
    /// Group rolls by their sorted faces, so the dice order does not matter.
    pub fn combinations(table: &WideResults<F>) -> Self {
        Self::group(table, |faces| {
            let mut key = faces.to_vec();
            key.sort();
            key
        })
    }

    /// Group rolls by their faces in die order.
    pub fn permutations(table: &WideResults<F>) -> Self {
        Self::group(table, |faces: &[F]| faces.to_vec())
    }

    fn group(table: &WideResults<F>, key_of: impl Fn(&[F]) -> Vec<F>) -> Self {
        let mut index: HashMap<Vec<F>, usize> = HashMap::new();
        let mut rows: Vec<ComboRow<F>> = Vec::new();

        for faces in table.rows() {
            let key = key_of(faces);
            match index.get(&key).copied() {
                Some(pos) => rows[pos].count += 1,
                None => {
                    index.insert(key.clone(), rows.len());
                    rows.push(ComboRow {
                        faces: key,
                        count: 1,
                    });
                }
            }
        }

        // sort_by is stable, so equal counts stay in first-appearance order
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        Self { rows }
    }

    /// Count for a key; combination keys must be given sorted
    pub fn get(&self, faces: &[F]) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.faces == faces)
            .map(|row| row.count)
    }
}

impl<F> ComboResults<F> {
    /// (distinct keys, 1 count column)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), 1)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ComboRow<F>] {
        &self.rows
    }

    /// Sum of all counts, equal to the number of rolls grouped
    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }
}

/// How often each observed face appears in each roll
///
/// Columns are every face seen anywhere in the results, in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceCounts<F> {
    faces: Vec<F>,
    counts: Vec<Vec<usize>>,
}

impl<F: Face> FaceCounts<F> {
    pub fn from_wide(table: &WideResults<F>) -> Self {
        let observed: BTreeSet<&F> = table.rows().iter().flatten().collect();
        let faces: Vec<F> = observed.into_iter().cloned().collect();
        let column_of: HashMap<&F, usize> =
            faces.iter().enumerate().map(|(i, f)| (f, i)).collect();

        let counts = table
            .rows()
            .iter()
            .map(|row| {
                let mut counts = vec![0; faces.len()];
                for face in row {
                    counts[column_of[face]] += 1;
                }
                counts
            })
            .collect();

        Self { faces, counts }
    }

    /// Occurrences of `face` on `roll`; 0 for an observed face absent from that roll
    pub fn count(&self, roll: usize, face: &F) -> Option<usize> {
        let column = self.faces.iter().position(|f| f == face)?;
        self.counts.get(roll).map(|row| row[column])
    }
}

impl<F> FaceCounts<F> {
    /// (rolls, distinct observed faces)
    pub fn shape(&self) -> (usize, usize) {
        (self.counts.len(), self.faces.len())
    }

    /// Column labels
    pub fn faces(&self) -> &[F] {
        &self.faces
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.counts
    }
}
