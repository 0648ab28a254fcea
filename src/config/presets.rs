//! Built-in tutorials.

use crate::core::{Axis, Result};
use crate::instructions::{EventCondition, Instruction};

/// Unwraps an instruction built from the literal patterns below.
fn preset(instruction: Result<Instruction>) -> Instruction {
    instruction.expect("built-in tutorial patterns are valid")
}

/// The ten-step tutorial shown before a hide-and-seek session.
///
/// Teaches picking up, moving and dropping objects, then opening and
/// toggling them. The two "all the way" steps are satisfied by a hand move
/// the engine rejects because the object is already at the limit.
pub fn hide_and_seek_tutorial() -> Vec<Instruction> {
    let pushed_in = EventCondition::Failed.and(EventCondition::delta_below(Axis::Z, 0.0));
    let pushed_out = EventCondition::Failed.and(EventCondition::delta_above(Axis::Z, 0.0));

    vec![
        Instruction::repeated_action_match(
            "Many objects can be picked up.\nPick up and drop at least two different objects.",
            "PickupObject",
            ".*",
            Some(2),
        ),
        Instruction::action_match(
            "Once you pick up an object, you can move it closer or farther away.\nFirst, pick up an object.",
            "PickupObject",
            ".*",
        ),
        Instruction::action_match("Now, use the scrollwheel to move it.", "MoveHandDelta", ".*"),
        Instruction::action_match("Now drop the object.", "ThrowObject", ".*"),
        Instruction::action_match("For practice, now pick up another object.", "PickupObject", ".*"),
        Instruction::action_match(
            "Now move it all the way in, as close to you as possible.",
            "MoveHandDelta",
            ".*",
        )
        .map(|i| i.with_check(pushed_in)),
        Instruction::action_match(
            "Now move it all the way out, as far away from you as possible.",
            "MoveHandDelta",
            ".*",
        )
        .map(|i| i.with_check(pushed_out)),
        Instruction::action_match("Now drop the object.", "ThrowObject", ".*"),
        Instruction::repeated_action_match(
            "Other objects can be opened and closed.\nOpen at least two different objects.",
            "OpenObject",
            ".*",
            Some(2),
        ),
        Instruction::action_match(
            "Other yet objects can be toggled (switched on and off).\nFind one and toggle it.",
            "ToggleObject.*",
            ".*",
        ),
    ]
    .into_iter()
    .map(preset)
    .collect()
}
