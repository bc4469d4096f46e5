//! PyO3 wrapper for Analyzer
//!
//! Holds a handle to the Python `Game`, so every statistic reflects the
//! game's results at call time, including plays made after the analyzer
//! was created.

use pyo3::prelude::*;

use super::dice::PyGame;
use crate::analysis::Analyzer;
use crate::models::FaceValue;

#[pyclass(name = "Analyzer")]
pub struct PyAnalyzer {
    game: Py<PyGame>,

    #[pyo3(get)]
    face_types: Vec<&'static str>,

    #[pyo3(get)]
    jackpot_count: usize,

    /// `(roll, faces, jackpot flag)` for each jackpot roll of the last `jackpot()` call
    #[pyo3(get)]
    jackpot_results: Vec<(usize, Vec<FaceValue>, bool)>,

    #[pyo3(get)]
    combo_count: usize,

    #[pyo3(get)]
    permutation_count: usize,
}

#[pymethods]
impl PyAnalyzer {
    #[new]
    fn new(py: Python<'_>, game: Py<PyGame>) -> Self {
        let face_types = {
            let borrowed = game.borrow(py);
            Analyzer::new(&borrowed.inner).face_types().to_vec()
        };
        PyAnalyzer {
            game,
            face_types,
            jackpot_count: 0,
            jackpot_results: Vec::new(),
            combo_count: 0,
            permutation_count: 0,
        }
    }

    /// Number of rolls where every die showed the same face
    ///
    /// The matching rows are kept in `jackpot_results`.
    fn jackpot(&mut self, py: Python<'_>) -> PyResult<usize> {
        let game = self.game.borrow(py);
        let mut analyzer = Analyzer::new(&game.inner);
        self.jackpot_count = analyzer.jackpot()?;
        self.jackpot_results = analyzer
            .jackpot_results()
            .map(|r| r.to_tuples())
            .unwrap_or_default();
        Ok(self.jackpot_count)
    }

    /// Distinct combinations as `(sorted faces, count)`, most frequent first
    fn combo(&mut self, py: Python<'_>) -> PyResult<Vec<(Vec<FaceValue>, usize)>> {
        let game = self.game.borrow(py);
        let mut analyzer = Analyzer::new(&game.inner);
        self.combo_count = analyzer.combo()?;
        Ok(analyzer
            .combo_results()
            .map(|r| r.rows().iter().map(|row| (row.faces.clone(), row.count)).collect())
            .unwrap_or_default())
    }

    /// Distinct ordered outcomes as `(faces, count)`, most frequent first
    fn permutation(&mut self, py: Python<'_>) -> PyResult<Vec<(Vec<FaceValue>, usize)>> {
        let game = self.game.borrow(py);
        let mut analyzer = Analyzer::new(&game.inner);
        self.permutation_count = analyzer.permutation()?;
        Ok(analyzer
            .permutation_results()
            .map(|r| r.rows().iter().map(|row| (row.faces.clone(), row.count)).collect())
            .unwrap_or_default())
    }

    /// `(face columns, per-roll count rows)`
    fn face_counts_per_roll(
        &self,
        py: Python<'_>,
    ) -> PyResult<(Vec<FaceValue>, Vec<Vec<usize>>)> {
        let game = self.game.borrow(py);
        let mut analyzer = Analyzer::new(&game.inner);
        let counts = analyzer.face_counts_per_roll()?;
        Ok((counts.faces().to_vec(), counts.rows().to_vec()))
    }
}
