// crates/enigma-core/src/wiring/design.rs

use crate::error::{EnigmaError, Result};
use crate::wiring::tables::{
    DESIGN_COUNT, ROTOR_INVERSE_WIRINGS, ROTOR_NOTCHES, ROTOR_WIRINGS,
};

const ROMAN: [&str; DESIGN_COUNT] = ["I", "II", "III", "IV", "V"];

/// One of the five catalogued wheels. Copy-cheap: the tables are `'static`.
/// Only [`lookup`] builds one, so `id` is always 1-5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotorDesign {
    id: u8,
    wiring: &'static [u8; 26],
    inverse: &'static [u8; 26],
    notch: u8,
}

impl RotorDesign {
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn wiring(&self) -> &'static [u8; 26] {
        self.wiring
    }

    pub fn inverse(&self) -> &'static [u8; 26] {
        self.inverse
    }

    pub fn notch(&self) -> u8 {
        self.notch
    }

    /// Roman numeral stamped on the wheel.
    pub fn roman(&self) -> &'static str {
        ROMAN[(self.id - 1) as usize]
    }
}

pub fn lookup(id: u8) -> Result<RotorDesign> {
    if !(1..=DESIGN_COUNT as u8).contains(&id) {
        return Err(EnigmaError::RotorSelection { id });
    }
    let i = (id - 1) as usize;
    Ok(RotorDesign {
        id,
        wiring: &ROTOR_WIRINGS[i],
        inverse: &ROTOR_INVERSE_WIRINGS[i],
        notch: ROTOR_NOTCHES[i],
    })
}

/// "I".."V" (any case) to a design id.
pub fn id_from_roman(s: &str) -> Option<u8> {
    let up = s.trim().to_ascii_uppercase();
    ROMAN
        .iter()
        .position(|r| *r == up)
        .map(|i| i as u8 + 1)
}

/// Design id to its numeral; `None` outside 1-5.
pub fn roman_from_id(id: u8) -> Option<&'static str> {
    lookup(id).ok().map(|d| d.roman())
}
