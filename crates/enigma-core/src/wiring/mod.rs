// crates/enigma-core/src/wiring/mod.rs

pub mod design;
pub mod reflector;
pub mod tables;
