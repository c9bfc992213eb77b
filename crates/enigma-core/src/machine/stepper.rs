// crates/enigma-core/src/machine/stepper.rs

//! Turnover state machine.
//!
//! The only state is the (right, middle, left) position triple. One
//! transition runs per alphabetic keystroke, before the letter is enciphered:
//!
//! 1. the right wheel always advances;
//! 2. if it has just reached its notch, the middle wheel advances;
//! 3. if the right wheel notched on this same keystroke and the middle wheel
//!    now sits on its notch, the left wheel advances too.
//!
//! Rule 3 is gated on the local `right_notched` flag. Checking the middle
//! notch on its own would advance the left wheel on every keystroke the
//! middle wheel spends parked on its notch.

use crate::letter;
use crate::machine::state::{RotorBank, LEFT, MIDDLE, RIGHT};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub middle_stepped: bool,
    pub left_stepped: bool,
}

/// Pure form of one keystroke's stepping over (right, middle, left).
pub fn transition(positions: [u8; 3], notches: [u8; 3]) -> ([u8; 3], StepOutcome) {
    let mut next = positions;

    next[RIGHT] = letter::add(positions[RIGHT], 1);
    let right_notched = next[RIGHT] == notches[RIGHT];

    if right_notched {
        next[MIDDLE] = letter::add(positions[MIDDLE], 1);
    }
    let left_steps = right_notched && next[MIDDLE] == notches[MIDDLE];
    if left_steps {
        next[LEFT] = letter::add(positions[LEFT], 1);
    }

    (
        next,
        StepOutcome {
            middle_stepped: right_notched,
            left_stepped: left_steps,
        },
    )
}

/// Apply one transition to the bank.
pub fn step(bank: &mut RotorBank) -> StepOutcome {
    let (_, outcome) = transition(bank.positions(), bank.notches());

    let rotors = bank.rotors_mut();
    rotors[RIGHT].advance_position();
    if outcome.middle_stepped {
        rotors[MIDDLE].advance_position();
    }
    if outcome.left_stepped {
        rotors[LEFT].advance_position();
    }
    outcome
}
