//! Python bindings for the tutorial engine.
//!
//! The data-collection backend stores every metadata record a participant
//! produced. These bindings let it replay them through the same rules the
//! page used.
//!
//! # Quick Start
//!
//! ```python
//! import tutorial_rules
//!
//! tutorial = tutorial_rules.Tutorial()
//! done = tutorial.replay(recorded_metadata)
//! for step in tutorial.steps():
//!     print(step.id, step.completed)
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// tutorial_rules: instruction rule engine for game-action tutorials.
#[pymodule]
fn tutorial_rules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTutorial>()?;
    m.add_class::<PyStep>()?;
    Ok(())
}
