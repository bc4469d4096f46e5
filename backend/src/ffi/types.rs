//! Type conversion utilities for the FFI boundary

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use crate::error::MonteCarloError;
use crate::models::{FaceValue, IntoWeight};

impl From<MonteCarloError> for PyErr {
    fn from(err: MonteCarloError) -> PyErr {
        match err {
            MonteCarloError::NoResultsYet => PyRuntimeError::new_err(err.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

impl<'py> FromPyObject<'py> for FaceValue {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        if ob.is_instance_of::<PyString>() {
            return Ok(FaceValue::Text(ob.extract()?));
        }
        match ob.extract::<i64>() {
            Ok(v) => Ok(FaceValue::Int(v)),
            Err(_) => Err(PyValueError::new_err(
                "faces must be int or str values",
            )),
        }
    }
}

impl IntoPy<PyObject> for FaceValue {
    fn into_py(self, py: Python<'_>) -> PyObject {
        match self {
            FaceValue::Int(v) => v.into_py(py),
            FaceValue::Text(s) => s.into_py(py),
        }
    }
}

/// Extract a weight from a Python number or numeric string.
pub fn extract_weight(value: &Bound<'_, PyAny>) -> PyResult<f64> {
    if value.is_instance_of::<PyString>() {
        let text: String = value.extract()?;
        return Ok(text.into_weight()?);
    }
    value.extract::<f64>().map_err(|_| {
        MonteCarloError::InvalidWeight(format!("{} is not a number", value)).into()
    })
}

/// Convert a Python roll count, rejecting values below 1.
pub fn extract_roll_count(n_rolls: i64) -> PyResult<usize> {
    if n_rolls < 1 {
        return Err(MonteCarloError::InvalidArgument(format!(
            "number of rolls must be at least 1, got {}",
            n_rolls
        ))
        .into());
    }
    Ok(n_rolls as usize)
}
