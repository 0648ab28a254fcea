//! The instruction cursor.
//!
//! The engine walks an ordered list of instructions. Each event is evaluated
//! against the active instruction only; later instructions never see events
//! until every earlier one is satisfied, and satisfied instructions never see
//! events again.

use serde::{Deserialize, Serialize};

use crate::core::{Result, RulesError};
use crate::events::ActionEvent;
use crate::instructions::{Instruction, InstructionId, InstructionProgress};

use super::observer::{StepStatus, StepView, TutorialObserver};
use super::snapshot::EngineSnapshot;

/// Where the engine is in the tutorial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// The instruction at this index is waiting to be satisfied.
    Active(usize),
    /// Every instruction has been satisfied.
    Complete,
}

/// Result of feeding one event to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The tutorial was already complete; the event was ignored.
    AlreadyComplete,
    /// The active instruction is still unsatisfied.
    Pending { active: usize },
    /// The active instruction was satisfied and the next one is now active.
    Advanced { completed: usize, active: usize },
    /// The last instruction was satisfied.
    Finished { completed: usize },
}

impl StepOutcome {
    /// Did this event satisfy an instruction?
    #[must_use]
    pub fn advanced(self) -> bool {
        matches!(self, Self::Advanced { .. } | Self::Finished { .. })
    }
}

/// An instruction with its resolved id and private progress.
#[derive(Clone, Debug)]
struct Step {
    id: InstructionId,
    instruction: Instruction,
    progress: InstructionProgress,
}

/// Drives a tutorial from a stream of action events.
///
/// `process_event` takes `&mut self`, so one evaluation runs at a time. Hosts
/// that share an engine between threads must put it behind a lock.
#[derive(Clone, Debug)]
pub struct TutorialEngine {
    steps: Vec<Step>,
    cursor: usize,
}

impl TutorialEngine {
    /// Create an engine. Instructions without an id get `instruction-{index}`.
    pub fn new(instructions: impl IntoIterator<Item = Instruction>) -> Self {
        let steps = instructions
            .into_iter()
            .enumerate()
            .map(|(index, mut instruction)| {
                let id = instruction
                    .id
                    .get_or_insert_with(|| InstructionId::positional(index))
                    .clone();
                Step {
                    id,
                    instruction,
                    progress: InstructionProgress::new(),
                }
            })
            .collect();

        Self { steps, cursor: 0 }
    }

    /// An engine running the built-in hide-and-seek tutorial.
    pub fn hide_and_seek() -> Self {
        Self::new(crate::config::presets::hide_and_seek_tutorial())
    }

    /// Number of instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.cursor < self.steps.len() {
            EngineState::Active(self.cursor)
        } else {
            EngineState::Complete
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state() == EngineState::Complete
    }

    /// Index of the active instruction.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        match self.state() {
            EngineState::Active(index) => Some(index),
            EngineState::Complete => None,
        }
    }

    /// The active instruction.
    #[must_use]
    pub fn active(&self) -> Option<&Instruction> {
        self.steps.get(self.cursor).map(|step| &step.instruction)
    }

    /// Has the instruction at `index` been satisfied?
    #[must_use]
    pub fn is_completed(&self, index: usize) -> bool {
        index < self.cursor.min(self.steps.len())
    }

    /// All instructions, in tutorial order, with ids assigned.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.steps.iter().map(|step| &step.instruction)
    }

    /// Progress of the instruction at `index`.
    #[must_use]
    pub fn progress(&self, index: usize) -> Option<&InstructionProgress> {
        self.steps.get(index).map(|step| &step.progress)
    }

    fn status(&self, index: usize) -> StepStatus {
        if index < self.cursor {
            StepStatus::Completed
        } else if index == self.cursor {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    /// View of one step.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<StepView<'_>> {
        self.steps.get(index).map(|step| StepView {
            index,
            id: &step.id,
            text: &step.instruction.text,
            status: self.status(index),
        })
    }

    /// Views of every step, for rendering.
    pub fn steps(&self) -> impl Iterator<Item = StepView<'_>> + '_ {
        (0..self.steps.len()).filter_map(|index| self.step(index))
    }

    /// Feed one event.
    pub fn process_event(&mut self, event: &ActionEvent) -> StepOutcome {
        self.process_event_with(event, &mut ())
    }

    /// Feed one event, reporting any transition to `observer`.
    pub fn process_event_with(
        &mut self,
        event: &ActionEvent,
        observer: &mut dyn TutorialObserver,
    ) -> StepOutcome {
        let index = self.cursor;
        let Some(step) = self.steps.get_mut(index) else {
            return StepOutcome::AlreadyComplete;
        };

        if !step.instruction.evaluate(event, &mut step.progress) {
            tracing::trace!(
                instruction = %step.id,
                action = event.action().unwrap_or_default(),
                "instruction not satisfied"
            );
            return StepOutcome::Pending { active: index };
        }

        tracing::debug!(
            instruction = %step.id,
            kind = step.instruction.kind.name(),
            "instruction satisfied"
        );
        self.cursor += 1;

        let completed = self.step(index);
        let next = self.step(self.cursor);
        if let Some(completed) = completed {
            observer.on_advance(completed, next);
        }

        if self.cursor == self.steps.len() {
            tracing::info!(steps = self.steps.len(), "tutorial complete");
            observer.on_complete();
            StepOutcome::Finished { completed: index }
        } else {
            tracing::debug!(active = self.cursor, "advanced to next instruction");
            StepOutcome::Advanced {
                completed: index,
                active: self.cursor,
            }
        }
    }

    /// Feed a sequence of events and return the final state.
    pub fn replay<'a>(&mut self, events: impl IntoIterator<Item = &'a ActionEvent>) -> EngineState {
        for event in events {
            if self.is_complete() {
                break;
            }
            self.process_event(event);
        }
        self.state()
    }

    /// Start over from the first instruction with no progress.
    pub fn reset(&mut self) {
        self.cursor = 0;
        for step in &mut self.steps {
            step.progress.clear();
        }
    }

    /// Capture the cursor and every instruction's progress.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            cursor: self.cursor,
            progress: self.steps.iter().map(|step| step.progress.clone()).collect(),
        }
    }

    /// Resume from a snapshot taken on an engine with the same tutorial.
    pub fn restore(&mut self, snapshot: EngineSnapshot) -> Result<()> {
        let expected = self.steps.len();
        if snapshot.progress.len() != expected {
            return Err(RulesError::SnapshotMismatch {
                expected,
                found: snapshot.progress.len(),
            });
        }
        if snapshot.cursor > expected {
            return Err(RulesError::SnapshotMismatch {
                expected,
                found: snapshot.cursor,
            });
        }

        for (step, progress) in self.steps.iter_mut().zip(snapshot.progress) {
            step.progress = progress;
        }
        self.cursor = snapshot.cursor;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TransitionLog;

    fn two_steps() -> TutorialEngine {
        TutorialEngine::new(vec![
            Instruction::action_match("Pick up", "PickupObject", ".*").unwrap(),
            Instruction::action_match("Drop", "ThrowObject", ".*").unwrap().with_id("drop"),
        ])
    }

    #[test]
    fn test_ids_assigned_by_position() {
        let engine = two_steps();
        let ids: Vec<_> = engine.steps().map(|s| s.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["instruction-0", "drop"]);
        assert!(engine.instructions().all(|i| i.id().is_some()));
    }

    #[test]
    fn test_initial_state() {
        let engine = two_steps();
        assert_eq!(engine.state(), EngineState::Active(0));
        assert_eq!(engine.step(0).unwrap().status, StepStatus::Active);
        assert_eq!(engine.step(1).unwrap().status, StepStatus::Pending);
    }

    #[test]
    fn test_empty_engine_is_complete() {
        let mut engine = TutorialEngine::new(Vec::new());
        assert!(engine.is_complete());
        assert_eq!(
            engine.process_event(&ActionEvent::new("PickupObject", true)),
            StepOutcome::AlreadyComplete
        );
    }

    #[test]
    fn test_strict_in_order_gating() {
        let mut engine = two_steps();

        // Satisfies step 1, but step 0 is active
        let drop = ActionEvent::new("ThrowObject", true);
        assert_eq!(engine.process_event(&drop), StepOutcome::Pending { active: 0 });

        let pickup = ActionEvent::new("PickupObject", true);
        assert_eq!(
            engine.process_event(&pickup),
            StepOutcome::Advanced { completed: 0, active: 1 }
        );
        // Same event again does not double-advance
        assert_eq!(engine.process_event(&pickup), StepOutcome::Pending { active: 1 });

        assert_eq!(engine.process_event(&drop), StepOutcome::Finished { completed: 1 });
        assert_eq!(engine.process_event(&drop), StepOutcome::AlreadyComplete);
        assert!(engine.is_completed(0) && engine.is_completed(1));
    }

    #[test]
    fn test_observer_notified() {
        let mut engine = two_steps();
        let mut log = TransitionLog::default();

        engine.process_event_with(&ActionEvent::new("PickupObject", true), &mut log);
        engine.process_event_with(&ActionEvent::new("ThrowObject", true), &mut log);
        engine.process_event_with(&ActionEvent::new("ThrowObject", true), &mut log);

        assert_eq!(
            log.advances,
            vec![
                (InstructionId::new("instruction-0"), Some(InstructionId::new("drop"))),
                (InstructionId::new("drop"), None),
            ]
        );
        assert_eq!(log.completions, 1);
    }

    #[test]
    fn test_reset() {
        let mut engine = two_steps();
        engine.replay(&[ActionEvent::new("PickupObject", true)]);
        assert_eq!(engine.active_index(), Some(1));

        engine.reset();
        assert_eq!(engine.active_index(), Some(0));
    }

    #[test]
    fn test_restore_rejects_other_tutorial() {
        let mut engine = two_steps();
        let err = engine
            .restore(EngineSnapshot { cursor: 0, progress: vec![InstructionProgress::new()] })
            .unwrap_err();
        assert!(matches!(err, RulesError::SnapshotMismatch { expected: 2, found: 1 }));

        let err = engine
            .restore(EngineSnapshot { cursor: 3, progress: vec![InstructionProgress::new(); 2] })
            .unwrap_err();
        assert!(matches!(err, RulesError::SnapshotMismatch { expected: 2, found: 3 }));
    }
}
