// crates/enigma-cli/src/io/mod.rs

pub mod text;
