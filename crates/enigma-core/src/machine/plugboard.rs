// crates/enigma-core/src/machine/plugboard.rs

use crate::error::{EnigmaError, Result};
use crate::letter::ALPHABET;

/// At most this many cables fit on the board.
pub const MAX_PAIRS: usize = 13;

/// Steckerbrett: swaps the letters of each pair, leaves the rest alone.
///
/// `table` is symmetric, so it is both the forward map and its inverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plugboard {
    table: [u8; 26],
    pairs: Vec<(u8, u8)>,
}

impl Plugboard {
    /// Board with no cables.
    pub fn empty() -> Self {
        let mut table = [0u8; 26];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self {
            table,
            pairs: Vec::new(),
        }
    }

    pub fn build(pairs: &[(u8, u8)]) -> Result<Self> {
        if pairs.len() > MAX_PAIRS {
            return Err(EnigmaError::PlugboardTooManyPairs { count: pairs.len() });
        }

        let mut board = Self::empty();
        let mut used = [false; 26];
        for &(a, b) in pairs {
            for l in [a, b] {
                if l >= ALPHABET {
                    return Err(EnigmaError::PlugboardLetter { letter: l });
                }
            }
            // A letter cabled to itself counts as using it twice.
            for l in [a, b] {
                if used[l as usize] {
                    return Err(EnigmaError::PlugboardDuplicateLetter { letter: l });
                }
                used[l as usize] = true;
            }
            board.table[a as usize] = b;
            board.table[b as usize] = a;
            board.pairs.push((a, b));
        }
        Ok(board)
    }

    #[inline]
    pub fn apply(&self, letter: u8) -> u8 {
        self.table[letter as usize]
    }

    /// Pairs in the order they were cabled.
    pub fn pairs(&self) -> &[(u8, u8)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}
