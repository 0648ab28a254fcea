//! Tutorial instructions.
//!
//! An instruction pairs display text with a rule over action events. Rules
//! are a closed set of kinds:
//!
//! - [`InstructionKind::ActionMatch`]: a matching action on a matching object
//! - [`InstructionKind::RepeatedActionMatch`]: the same, on N distinctly named objects
//! - [`InstructionKind::ActionAtPosition`]: a matching action that leaves the object at a spot
//! - [`InstructionKind::ObjectStatusCheck`]: some scene object has a status value
//! - [`InstructionKind::ObjectNearPosition`]: some scene object is near a spot
//!
//! ## Example Usage
//!
//! ```
//! use tutorial_rules::events::ActionEvent;
//! use tutorial_rules::instructions::{Instruction, InstructionProgress};
//!
//! let open_two = Instruction::repeated_action_match(
//!     "Open at least two different objects",
//!     "OpenObject",
//!     ".*",
//!     Some(2),
//! )
//! .unwrap();
//!
//! let mut progress = InstructionProgress::new();
//! let fridge = ActionEvent::new("OpenObject", true).on_object("Fridge|1", "Fridge_1");
//! let drawer = ActionEvent::new("OpenObject", true).on_object("Drawer|1", "Drawer_1");
//!
//! assert!(!open_two.evaluate(&fridge, &mut progress));
//! assert!(open_two.evaluate(&drawer, &mut progress));
//! ```

mod condition;
mod instruction;
mod progress;

pub use condition::EventCondition;
pub use instruction::{
    matching_objects, ActionFilter, Instruction, InstructionId, InstructionKind,
    DEFAULT_REPEAT_TIMES,
};
pub use progress::InstructionProgress;
