//! Python FFI bindings via PyO3.
//!
//! Lets a Python web host call the diagnosis pipeline directly after running
//! its own regression models.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! import kansei_core
//!
//! pred_x = model_x.predict([features])[0]
//! pred_y = model_y.predict([features])[0]
//! d = kansei_core.diagnose(pred_x, pred_y)
//! print(d.x_bucket, d.y_bucket, d.region_ja)
//! print(d.words)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::bucket::BucketLabel;
use crate::error::DiagnoseError;
use crate::lexicon::{words_for_label, NOT_APPLICABLE};
use crate::pipeline::{Diagnoser, Diagnosis as RustDiagnosis};
use crate::region::classify as rust_classify;

fn to_py_err(e: DiagnoseError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Shared diagnoser; the lexicon index is built on first use and only read afterwards.
fn diagnoser() -> &'static Diagnoser {
    static DIAGNOSER: std::sync::OnceLock<Diagnoser> = std::sync::OnceLock::new();
    DIAGNOSER.get_or_init(Diagnoser::new)
}

// ── Diagnosis ─────────────────────────────────────────────────────────────────

/// Result of one diagnosis.
///
/// Attributes:
///     pred_x, pred_y: raw scores passed in
///     x_bucket, y_bucket: bucket labels in {-3, -2, -1, 1, 2, 3}
///     region: kebab-case region name, e.g. "future-positive"
///     region_ja: Japanese display name, e.g. "未来ポジティブ"
///     words: list of kansei words, or ["not applicable"]
#[pyclass(name = "Diagnosis", frozen)]
pub struct PyDiagnosis {
    inner: RustDiagnosis,
}

#[pymethods]
impl PyDiagnosis {
    /// Raw x-axis score.
    #[getter]
    pub fn pred_x(&self) -> f64 {
        self.inner.scores.x
    }

    /// Raw y-axis score.
    #[getter]
    pub fn pred_y(&self) -> f64 {
        self.inner.scores.y
    }

    /// Bucket label of the x score.
    #[getter]
    pub fn x_bucket(&self) -> i8 {
        self.inner.x_bucket.value()
    }

    /// Bucket label of the y score.
    #[getter]
    pub fn y_bucket(&self) -> i8 {
        self.inner.y_bucket.value()
    }

    /// Kebab-case region name.
    #[getter]
    pub fn region(&self) -> &'static str {
        self.inner.quadrant.label()
    }

    /// Japanese region display name.
    #[getter]
    pub fn region_ja(&self) -> &'static str {
        self.inner.quadrant.label_ja()
    }

    /// Kansei words for the region.
    #[getter]
    pub fn words(&self) -> Vec<&'static str> {
        self.inner.words.as_slice().to_vec()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "Diagnosis(x_bucket={}, y_bucket={}, region='{}', words={})",
            self.inner.x_bucket,
            self.inner.y_bucket,
            self.inner.quadrant.label(),
            self.inner.words.len(),
        )
    }
}

// ── Functions ─────────────────────────────────────────────────────────────────

/// Bucket a raw score into {-3, -2, -1, 1, 2, 3}.
///
/// Raises ValueError for NaN or infinite input.
#[pyfunction]
pub fn round_bucket(value: f64) -> PyResult<i8> {
    crate::bucket::round_bucket(value)
        .map(BucketLabel::value)
        .map_err(to_py_err)
}

/// Classify two bucket labels into a region name.
///
/// Raises ValueError if either label is outside {-3, -2, -1, 1, 2, 3}.
#[pyfunction]
pub fn classify(x: i8, y: i8) -> PyResult<&'static str> {
    let x = BucketLabel::try_from(x).map_err(to_py_err)?;
    let y = BucketLabel::try_from(y).map_err(to_py_err)?;
    Ok(rust_classify(x, y).label())
}

/// Kansei words for a region name (kebab-case or Japanese).
///
/// Unknown names return ["not applicable"].
#[pyfunction]
pub fn words_for(region: &str) -> Vec<&'static str> {
    words_for_label(region).into_vec()
}

/// Run the full pipeline on two raw scores.
///
/// Raises ValueError for NaN or infinite input.
#[pyfunction]
pub fn diagnose(x: f64, y: f64) -> PyResult<PyDiagnosis> {
    let inner = diagnoser().diagnose(x, y).map_err(to_py_err)?;
    Ok(PyDiagnosis { inner })
}

// ── Module entry point ────────────────────────────────────────────────────────

/// kansei_core: photo impression diagnosis core.
#[pymodule]
pub fn kansei_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDiagnosis>()?;
    m.add_function(wrap_pyfunction!(round_bucket, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_function(wrap_pyfunction!(words_for, m)?)?;
    m.add_function(wrap_pyfunction!(diagnose, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("NOT_APPLICABLE", NOT_APPLICABLE)?;
    Ok(())
}
