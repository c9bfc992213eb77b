// crates/enigma-core/src/settings/mod.rs

pub mod defaults;
pub mod key_line;
pub mod settings;
