//! Property tests for the instruction cursor.

use proptest::prelude::*;

use tutorial_rules::engine::{EngineState, StepOutcome, StepStatus, TutorialEngine};
use tutorial_rules::events::ActionEvent;
use tutorial_rules::Vec3;

const ACTIONS: [&str; 6] = [
    "PickupObject",
    "ThrowObject",
    "MoveHandDelta",
    "OpenObject",
    "ToggleObjectOn",
    "MoveAhead",
];
const OBJECTS: [&str; 4] = ["Apple_1", "Mug_1", "Fridge_1", "Lamp_1"];

fn arb_event() -> impl Strategy<Value = ActionEvent> {
    (0..ACTIONS.len(), 0..OBJECTS.len(), any::<bool>(), -1.0f64..1.0).prop_map(
        |(action, object, success, z)| {
            ActionEvent::new(ACTIONS[action], success)
                .on_object(OBJECTS[object], OBJECTS[object])
                .with_delta(Vec3::new(0.0, 0.0, z))
        },
    )
}

fn active_count(engine: &TutorialEngine) -> usize {
    engine.steps().filter(|s| s.status == StepStatus::Active).count()
}

proptest! {
    #[test]
    fn cursor_is_monotone_with_one_active_step(events in prop::collection::vec(arb_event(), 0..200)) {
        let mut engine = TutorialEngine::hide_and_seek();
        let mut last = 0usize;

        for event in &events {
            engine.process_event(event);

            let position = engine.active_index().unwrap_or(engine.len());
            prop_assert!(position >= last);
            prop_assert!(position <= last + 1);
            last = position;

            let expected_active = usize::from(!engine.is_complete());
            prop_assert_eq!(active_count(&engine), expected_active);
        }
    }

    #[test]
    fn replaying_a_satisfying_event_never_double_advances(events in prop::collection::vec(arb_event(), 0..100)) {
        let mut engine = TutorialEngine::hide_and_seek();

        for event in &events {
            if let StepOutcome::Advanced { active, .. } = engine.process_event(event) {
                // The same event again can move the cursor at most one more step
                let again = engine.process_event(event);
                let after = engine.active_index().unwrap_or(engine.len());
                prop_assert!(after <= active + 1);
                if let StepOutcome::Advanced { completed, .. } | StepOutcome::Finished { completed } = again {
                    prop_assert_eq!(completed, active);
                }
            }
        }
    }

    #[test]
    fn completed_steps_form_a_prefix(events in prop::collection::vec(arb_event(), 0..200)) {
        let mut engine = TutorialEngine::hide_and_seek();
        engine.replay(&events);

        let statuses: Vec<_> = engine.steps().map(|s| s.status).collect();
        let done = statuses.iter().take_while(|s| **s == StepStatus::Completed).count();
        prop_assert!(statuses[done..].iter().all(|s| *s != StepStatus::Completed));

        match engine.state() {
            EngineState::Active(index) => prop_assert_eq!(index, done),
            EngineState::Complete => prop_assert_eq!(done, engine.len()),
        }
    }

    #[test]
    fn snapshot_restore_preserves_behavior(
        prefix in prop::collection::vec(arb_event(), 0..60),
        suffix in prop::collection::vec(arb_event(), 0..60),
    ) {
        let mut original = TutorialEngine::hide_and_seek();
        original.replay(&prefix);

        let mut resumed = TutorialEngine::hide_and_seek();
        resumed.restore(original.snapshot()).unwrap();

        for event in &suffix {
            prop_assert_eq!(original.process_event(event), resumed.process_event(event));
        }
    }
}
