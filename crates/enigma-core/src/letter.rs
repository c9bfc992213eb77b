// crates/enigma-core/src/letter.rs

/// Number of contacts on every wheel.
pub const ALPHABET: u8 = 26;

/// Index 0-25 for an ASCII letter of either case; `None` for anything else.
#[inline]
pub fn to_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Uppercase letter for an index. Indices are reduced mod 26.
#[inline]
pub fn to_char(i: u8) -> char {
    (b'A' + i % ALPHABET) as char
}

/// (a + b) mod 26 for values already in 0..26.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    (a + b) % ALPHABET
}

/// (a - b) mod 26 for values already in 0..26.
#[inline]
pub fn sub(a: u8, b: u8) -> u8 {
    (a + ALPHABET - b) % ALPHABET
}
