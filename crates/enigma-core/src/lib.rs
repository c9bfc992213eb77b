//! Enigma I cipher machine: three wheels out of five, UKW-B reflector and a
//! plugboard, with the historical double-stepping turnover.
//!
//! ```
//! use enigma_core::settings::defaults::default_settings;
//! use enigma_core::encipher;
//!
//! let key = default_settings();
//! let cipher = encipher("Attack at dawn", &key).unwrap();
//! assert_eq!(encipher(&cipher, &key).unwrap(), "ATTACK AT DAWN");
//! ```

pub mod error;
pub mod letter;
pub mod validate;

pub mod machine;
pub mod settings;
pub mod stats;
pub mod wiring;

pub use crate::error::{EnigmaError, Result};
pub use crate::machine::engine::{encipher, process, CipherEngine, Keystroke};
pub use crate::machine::plugboard::Plugboard;
pub use crate::machine::rotor::Rotor;
pub use crate::machine::state::RotorBank;
pub use crate::settings::settings::{MachineSettings, RotorSettings};
