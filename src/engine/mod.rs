//! Instruction engine.
//!
//! The engine owns an ordered list of instructions and a single cursor:
//!
//! - [`TutorialEngine`]: evaluates events against the active instruction
//! - [`EngineState`]: `Active(i)` or `Complete`
//! - [`StepOutcome`]: what one event did
//! - [`TutorialObserver`]: callbacks for a UI that highlights and strikes steps
//! - [`EngineSnapshot`]: cursor and progress, for resuming a session
//!
//! ## Example Usage
//!
//! ```
//! use tutorial_rules::engine::{EngineState, StepOutcome, TutorialEngine};
//! use tutorial_rules::events::ActionEvent;
//! use tutorial_rules::instructions::Instruction;
//!
//! let mut engine = TutorialEngine::new(vec![
//!     Instruction::action_match("Open the fridge", "OpenObject", "Fridge").unwrap(),
//!     Instruction::action_match("Close the fridge", "CloseObject", "Fridge").unwrap(),
//! ]);
//!
//! let open = ActionEvent::new("OpenObject", true).on_object("Fridge|1", "Fridge_1");
//! let close = ActionEvent::new("CloseObject", true).on_object("Fridge|1", "Fridge_1");
//!
//! assert_eq!(engine.process_event(&open), StepOutcome::Advanced { completed: 0, active: 1 });
//! assert_eq!(engine.process_event(&close), StepOutcome::Finished { completed: 1 });
//! assert_eq!(engine.state(), EngineState::Complete);
//! ```

mod observer;
mod snapshot;
mod tutorial;

pub use observer::{StepStatus, StepView, TransitionLog, TutorialObserver};
pub use snapshot::EngineSnapshot;
pub use tutorial::{EngineState, StepOutcome, TutorialEngine};
