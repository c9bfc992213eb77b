use crate::machine::stepper::StepOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Alphabetic characters enciphered (one step each).
    pub keystrokes: u64,
    /// Characters copied through untouched.
    pub passthrough: u64,
    pub middle_steps: u64,
    pub left_steps: u64,
}

impl Counters {
    pub fn observe_step(&mut self, o: StepOutcome) {
        self.keystrokes += 1;
        if o.middle_stepped {
            self.middle_steps += 1;
        }
        if o.left_stepped {
            self.left_steps += 1;
        }
    }
}
