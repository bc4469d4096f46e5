//! PyO3 wrappers for Die and Game

use pyo3::prelude::*;

use super::types::{extract_roll_count, extract_weight};
use crate::models::{Die, FaceValue, Game, GameResults, ResultForm};
use crate::rng::DiceRng;

/// Python wrapper for a weighted die
///
/// # Example (from Python)
///
/// ```python
/// from montecarlo_core_rs import Die
///
/// die = Die(["a", "b", "c", "d"], seed=42)
/// die.change_weight("b", "2")
/// print(die.roll_die(5))
/// ```
#[pyclass(name = "Die")]
#[derive(Clone)]
pub struct PyDie {
    pub(crate) inner: Die<FaceValue>,
    rng: DiceRng,
}

#[pymethods]
impl PyDie {
    #[new]
    #[pyo3(signature = (faces, seed=None))]
    fn new(faces: Vec<FaceValue>, seed: Option<u64>) -> PyResult<Self> {
        let inner = Die::new(faces)?;
        let rng = seed.map_or_else(DiceRng::from_entropy, DiceRng::new);
        Ok(PyDie { inner, rng })
    }

    /// Change the weight of a single face
    fn change_weight(&mut self, face: FaceValue, new_weight: &Bound<'_, PyAny>) -> PyResult<()> {
        let weight = extract_weight(new_weight)?;
        self.inner.change_weight(&face, weight)?;
        Ok(())
    }

    /// Roll the die one or more times
    #[pyo3(signature = (n_rolls=1))]
    fn roll_die(&mut self, n_rolls: i64) -> PyResult<Vec<FaceValue>> {
        let n = extract_roll_count(n_rolls)?;
        Ok(self.inner.roll(n, &mut self.rng)?)
    }

    /// Faces and weights as a list of `(face, weight)` tuples
    fn show_die(&self) -> Vec<(FaceValue, f64)> {
        self.inner.snapshot()
    }

    #[getter]
    fn faces(&self) -> Vec<FaceValue> {
        self.inner.faces().to_vec()
    }
}

/// Python wrapper for a game
///
/// The game copies the dice it is given; later weight changes on the Python
/// `Die` objects do not affect it.
#[pyclass(name = "Game")]
pub struct PyGame {
    pub(crate) inner: Game<FaceValue>,
}

#[pymethods]
impl PyGame {
    #[new]
    #[pyo3(signature = (dice, seed=None))]
    fn new(dice: Vec<PyRef<'_, PyDie>>, seed: Option<u64>) -> PyResult<Self> {
        let dice: Vec<Die<FaceValue>> = dice.iter().map(|d| d.inner.clone()).collect();
        let inner = match seed {
            Some(seed) => Game::with_seed(dice, seed)?,
            None => Game::new(dice)?,
        };
        Ok(PyGame { inner })
    }

    /// Roll every die `n_rolls` times, replacing previous results
    fn play(&mut self, n_rolls: i64) -> PyResult<()> {
        let n = extract_roll_count(n_rolls)?;
        self.inner.play(n)?;
        Ok(())
    }

    /// Results of the most recent play
    ///
    /// `"wide"` returns a list of rows (one face per die);
    /// `"narrow"` returns a list of `(roll, die, face)` tuples.
    fn show_results(&self, py: Python<'_>, form: &str) -> PyResult<PyObject> {
        let form: ResultForm = form.parse()?;
        let object = match self.inner.results(form)? {
            GameResults::Wide(table) => table.rows().to_vec().into_py(py),
            GameResults::Narrow(table) => table
                .rows()
                .iter()
                .map(|r| (r.roll, r.die, r.face.clone()))
                .collect::<Vec<_>>()
                .into_py(py),
        };
        Ok(object)
    }

    /// JSON checkpoint of the game state
    fn save_state(&self) -> PyResult<String> {
        Ok(self.inner.save_state()?)
    }

    #[staticmethod]
    fn load_state(json: &str) -> PyResult<Self> {
        Ok(PyGame {
            inner: Game::load_state(json)?,
        })
    }

    #[getter]
    fn num_dice(&self) -> usize {
        self.inner.num_dice()
    }
}
