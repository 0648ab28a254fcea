//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::config::TutorialConfig;
use crate::core::RulesError;
use crate::engine::{EngineSnapshot, StepStatus, TutorialEngine};
use crate::events::ActionEvent;

fn to_py_err(err: RulesError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a single step's display state.
#[pyclass(name = "Step")]
#[derive(Clone, Debug)]
pub struct PyStep {
    #[pyo3(get)]
    index: usize,
    #[pyo3(get)]
    id: String,
    #[pyo3(get)]
    text: String,
    #[pyo3(get)]
    active: bool,
    #[pyo3(get)]
    completed: bool,
}

#[pymethods]
impl PyStep {
    fn __repr__(&self) -> String {
        let status = if self.completed {
            "completed"
        } else if self.active {
            "active"
        } else {
            "pending"
        };
        format!("Step(id={:?}, {})", self.id, status)
    }
}

/// Python wrapper for TutorialEngine.
///
/// Used by the backend to replay recorded metadata and check whether a
/// participant actually finished the tutorial.
#[pyclass(name = "Tutorial")]
pub struct PyTutorial(pub TutorialEngine);

#[pymethods]
impl PyTutorial {
    /// Create a tutorial.
    ///
    /// # Arguments
    /// - config_json: JSON tutorial definition (default: the hide-and-seek tutorial)
    #[new]
    #[pyo3(signature = (config_json = None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let engine = match config_json {
            Some(json) => TutorialConfig::from_json(json).and_then(TutorialConfig::into_engine),
            None => Ok(TutorialEngine::hide_and_seek()),
        };
        engine.map(Self).map_err(to_py_err)
    }

    /// Feed one engine metadata record (JSON). Returns True if a step was satisfied.
    fn process_metadata(&mut self, metadata_json: &str) -> PyResult<bool> {
        let event = ActionEvent::from_metadata_json(metadata_json).map_err(to_py_err)?;
        Ok(self.0.process_event(&event).advanced())
    }

    /// Feed a list of metadata records. Returns True if the tutorial is complete.
    fn replay(&mut self, records: Vec<String>) -> PyResult<bool> {
        let events = records
            .iter()
            .map(|json| ActionEvent::from_metadata_json(json))
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_py_err)?;
        self.0.replay(&events);
        Ok(self.0.is_complete())
    }

    /// Index of the active step, or None when complete.
    #[getter]
    fn active_index(&self) -> Option<usize> {
        self.0.active_index()
    }

    #[getter]
    fn is_complete(&self) -> bool {
        self.0.is_complete()
    }

    /// Every step with its display state.
    fn steps(&self) -> Vec<PyStep> {
        self.0
            .steps()
            .map(|step| PyStep {
                index: step.index,
                id: step.id.to_string(),
                text: step.text.to_string(),
                active: step.status == StepStatus::Active,
                completed: step.status == StepStatus::Completed,
            })
            .collect()
    }

    fn reset(&mut self) {
        self.0.reset();
    }

    /// Serialize progress to bytes.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.0.snapshot().to_bytes().map_err(to_py_err)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Restore progress from `snapshot()` bytes.
    fn restore(&mut self, data: &[u8]) -> PyResult<()> {
        let snapshot = EngineSnapshot::from_bytes(data).map_err(to_py_err)?;
        self.0.restore(snapshot).map_err(to_py_err)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        match self.0.active_index() {
            Some(index) => format!("Tutorial(step {}/{})", index + 1, self.0.len()),
            None => format!("Tutorial(complete, {} steps)", self.0.len()),
        }
    }
}
