// crates/enigma-core/src/machine/mod.rs

pub mod engine;
pub mod plugboard;
pub mod rotor;
pub mod state;
pub mod stepper;
