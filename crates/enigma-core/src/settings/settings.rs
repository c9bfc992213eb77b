// crates/enigma-core/src/settings/settings.rs

use crate::error::Result;
use crate::machine::plugboard::Plugboard;
use crate::machine::rotor::Rotor;
use crate::machine::state::{RotorBank, LEFT, MIDDLE, RIGHT};

/// One wheel as the operator sets it up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotorSettings {
    /// 1-5 (I-V).
    pub design: u8,
    /// Ring setting as entered, 1-26.
    pub ring: u8,
    /// Start position, 0-25.
    pub position: u8,
}

impl RotorSettings {
    pub const fn new(design: u8, ring: u8, position: u8) -> Self {
        Self {
            design,
            ring,
            position,
        }
    }

    pub fn build(&self) -> Result<Rotor> {
        Rotor::new(self.design, self.ring, self.position)
    }
}

/// Complete daily key: three wheels (right, middle, left) plus cables.
///
/// Plain data. Every cipher run builds its own bank and board from it, so two
/// runs never share rotor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineSettings {
    pub rotors: [RotorSettings; 3],
    pub plugboard: Vec<(u8, u8)>,
}

impl MachineSettings {
    pub fn new(
        right: RotorSettings,
        middle: RotorSettings,
        left: RotorSettings,
        plugboard: Vec<(u8, u8)>,
    ) -> Self {
        Self {
            rotors: [right, middle, left],
            plugboard,
        }
    }

    pub fn right(&self) -> &RotorSettings {
        &self.rotors[RIGHT]
    }

    pub fn middle(&self) -> &RotorSettings {
        &self.rotors[MIDDLE]
    }

    pub fn left(&self) -> &RotorSettings {
        &self.rotors[LEFT]
    }

    pub fn build_bank(&self) -> Result<RotorBank> {
        RotorBank::new(
            self.rotors[RIGHT].build()?,
            self.rotors[MIDDLE].build()?,
            self.rotors[LEFT].build()?,
        )
    }

    pub fn build_plugboard(&self) -> Result<Plugboard> {
        Plugboard::build(&self.plugboard)
    }
}
