//! What the engine exposes to a UI layer.

use serde::{Deserialize, Serialize};

use crate::instructions::InstructionId;

/// Display state of a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepStatus {
    /// Not reached yet.
    Pending,
    /// The step the player is working on (render emphasized).
    Active,
    /// Satisfied (render struck through).
    Completed,
}

/// Read-only view of one step for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepView<'a> {
    pub index: usize,
    pub id: &'a InstructionId,
    pub text: &'a str,
    pub status: StepStatus,
}

/// Receives engine transitions.
///
/// Both callbacks default to doing nothing, so observers only implement what
/// they render.
pub trait TutorialObserver {
    /// A step was satisfied. `next` is the newly active step, if any remain.
    fn on_advance(&mut self, _completed: StepView<'_>, _next: Option<StepView<'_>>) {}

    /// The last step was satisfied. Called exactly once per run.
    fn on_complete(&mut self) {}
}

/// The null observer.
impl TutorialObserver for () {}

/// Records transitions as owned ids, mainly for hosts that forward them
/// elsewhere after the call returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionLog {
    /// `(completed, next)` pairs in the order they happened.
    pub advances: Vec<(InstructionId, Option<InstructionId>)>,
    /// Number of completion signals received.
    pub completions: usize,
}

impl TutorialObserver for TransitionLog {
    fn on_advance(&mut self, completed: StepView<'_>, next: Option<StepView<'_>>) {
        self.advances
            .push((completed.id.clone(), next.map(|step| step.id.clone())));
    }

    fn on_complete(&mut self) {
        self.completions += 1;
    }
}
