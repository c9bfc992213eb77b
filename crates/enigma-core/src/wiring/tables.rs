// crates/enigma-core/src/wiring/tables.rs

//! Enigma I wheel wiring, 0-based (A = 0).
//!
//! Row `n` belongs to rotor design `n + 1`. Each row is a permutation of
//! 0..26; `tests/wiring_tables.rs` holds the line on that.

pub const DESIGN_COUNT: usize = 5;

pub const ROTOR_WIRINGS: [[u8; 26]; DESIGN_COUNT] = [
    // I
    [4, 10, 12, 5, 11, 6, 3, 16, 21, 25, 13, 19, 14, 22, 24, 7, 23, 20, 18, 15, 0, 8, 1, 17, 2, 9],
    // II
    [0, 9, 3, 10, 18, 8, 17, 20, 23, 1, 11, 7, 22, 19, 12, 2, 16, 6, 25, 13, 15, 24, 5, 21, 14, 4],
    // III
    [1, 3, 5, 7, 9, 11, 2, 15, 17, 19, 23, 21, 25, 13, 24, 4, 8, 22, 6, 0, 10, 12, 20, 18, 16, 14],
    // IV
    [4, 18, 14, 21, 15, 25, 9, 0, 24, 16, 20, 8, 17, 7, 23, 11, 13, 5, 19, 6, 10, 3, 2, 12, 22, 1],
    // V
    [21, 25, 1, 17, 6, 8, 19, 24, 20, 15, 18, 3, 13, 7, 11, 23, 0, 22, 12, 9, 16, 14, 5, 4, 2, 10],
];

/// Position at which each design kicks the next wheel over.
pub const ROTOR_NOTCHES: [u8; DESIGN_COUNT] = [24, 12, 3, 17, 7];

/// UKW-B.
pub const REFLECTOR_B: [u8; 26] = [
    24, 17, 20, 7, 16, 18, 11, 3, 15, 23, 13, 6, 14, 10, 12, 8, 4, 1, 5, 25, 2, 22, 21, 9, 0, 19,
];

/// Inverse of a 26-entry permutation, evaluated at compile time.
pub const fn invert(w: &[u8; 26]) -> [u8; 26] {
    let mut out = [0u8; 26];
    let mut i = 0;
    while i < 26 {
        out[w[i] as usize] = i as u8;
        i += 1;
    }
    out
}

pub const ROTOR_INVERSE_WIRINGS: [[u8; 26]; DESIGN_COUNT] = [
    invert(&ROTOR_WIRINGS[0]),
    invert(&ROTOR_WIRINGS[1]),
    invert(&ROTOR_WIRINGS[2]),
    invert(&ROTOR_WIRINGS[3]),
    invert(&ROTOR_WIRINGS[4]),
];
