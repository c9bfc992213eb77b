// crates/enigma-cli/src/cmd/mod.rs

pub mod encipher;
pub mod key;
pub mod settings;
pub mod trace;
