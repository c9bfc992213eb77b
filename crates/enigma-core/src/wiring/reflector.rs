// crates/enigma-core/src/wiring/reflector.rs

use crate::wiring::tables::REFLECTOR_B;

/// Fixed reflector. Involution without fixed points; not configurable.
#[derive(Clone, Copy, Debug)]
pub struct Reflector {
    table: &'static [u8; 26],
}

impl Reflector {
    pub const B: Reflector = Reflector { table: &REFLECTOR_B };

    #[inline]
    pub fn reflect(&self, letter: u8) -> u8 {
        self.table[letter as usize]
    }

    pub fn table(&self) -> &'static [u8; 26] {
        self.table
    }
}

impl Default for Reflector {
    fn default() -> Self {
        Reflector::B
    }
}
