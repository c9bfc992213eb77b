// crates/enigma-core/src/machine/state.rs

use crate::error::{EnigmaError, Result};
use crate::machine::rotor::Rotor;

/// Slot order used everywhere in this crate: right, middle, left.
pub const RIGHT: usize = 0;
pub const MIDDLE: usize = 1;
pub const LEFT: usize = 2;

/// The three installed wheels. Signal enters at the right-hand wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotorBank {
    rotors: [Rotor; 3],
}

impl RotorBank {
    pub fn new(right: Rotor, middle: Rotor, left: Rotor) -> Result<Self> {
        if right.id() == middle.id() || right.id() == left.id() {
            return Err(EnigmaError::DuplicateRotor { id: right.id() });
        }
        if middle.id() == left.id() {
            return Err(EnigmaError::DuplicateRotor { id: middle.id() });
        }
        Ok(Self {
            rotors: [right, middle, left],
        })
    }

    pub fn right(&self) -> &Rotor {
        &self.rotors[RIGHT]
    }

    pub fn middle(&self) -> &Rotor {
        &self.rotors[MIDDLE]
    }

    pub fn left(&self) -> &Rotor {
        &self.rotors[LEFT]
    }

    pub fn rotors(&self) -> &[Rotor; 3] {
        &self.rotors
    }

    pub(crate) fn rotors_mut(&mut self) -> &mut [Rotor; 3] {
        &mut self.rotors
    }

    /// (right, middle, left) positions.
    pub fn positions(&self) -> [u8; 3] {
        [
            self.rotors[RIGHT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[LEFT].position(),
        ]
    }

    /// (right, middle, left) notches.
    pub fn notches(&self) -> [u8; 3] {
        [
            self.rotors[RIGHT].notch(),
            self.rotors[MIDDLE].notch(),
            self.rotors[LEFT].notch(),
        ]
    }

    /// Right → middle → left.
    #[inline]
    pub fn forward(&self, letter: u8) -> u8 {
        self.rotors
            .iter()
            .fold(letter, |l, r| r.forward_pass(l))
    }

    /// Left → middle → right.
    #[inline]
    pub fn backward(&self, letter: u8) -> u8 {
        self.rotors
            .iter()
            .rev()
            .fold(letter, |l, r| r.backward_pass(l))
    }
}
