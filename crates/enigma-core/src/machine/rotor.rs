// crates/enigma-core/src/machine/rotor.rs

use crate::error::{EnigmaError, Result};
use crate::letter::{self, ALPHABET};
use crate::wiring::design::{lookup, RotorDesign};

/// A wheel installed in one slot.
///
/// `ring` is stored zero-based (entered 1-26, kept as value - 1). `position`
/// is the only field that changes once the wheel is built, and only through
/// [`Rotor::advance_position`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotor {
    design: RotorDesign,
    ring: u8,
    position: u8,
}

impl Rotor {
    /// `ring_setting` is as entered (1-26); `position` is 0-25.
    pub fn new(design_id: u8, ring_setting: u8, position: u8) -> Result<Self> {
        let design = lookup(design_id)?;
        if !(1..=ALPHABET).contains(&ring_setting) {
            return Err(EnigmaError::RotorSetting {
                design: design_id,
                ring: ring_setting,
            });
        }
        if position >= ALPHABET {
            return Err(EnigmaError::RotorPosition {
                design: design_id,
                position,
            });
        }
        Ok(Self {
            design,
            ring: ring_setting - 1,
            position,
        })
    }

    pub fn design(&self) -> RotorDesign {
        self.design
    }

    pub fn id(&self) -> u8 {
        self.design.id()
    }

    pub fn notch(&self) -> u8 {
        self.design.notch()
    }

    /// Zero-based ring setting.
    pub fn ring(&self) -> u8 {
        self.ring
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn at_notch(&self) -> bool {
        self.position == self.design.notch()
    }

    pub fn advance_position(&mut self) {
        self.position = letter::add(self.position, 1);
    }

    /// Entry side to reflector side: offset by position, through the wiring,
    /// then shift by the ring setting.
    #[inline]
    pub fn forward_pass(&self, letter: u8) -> u8 {
        let shifted = letter::add(letter, self.position);
        let wired = self.design.wiring()[shifted as usize];
        letter::add(wired, self.ring)
    }

    /// Exact inverse of [`Rotor::forward_pass`] at the same position.
    #[inline]
    pub fn backward_pass(&self, letter: u8) -> u8 {
        let unshifted = letter::sub(letter, self.ring);
        let unwired = self.design.inverse()[unshifted as usize];
        letter::sub(unwired, self.position)
    }
}
