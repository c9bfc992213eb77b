// crates/enigma-cli/src/io/text.rs

use anyhow::{Context, Result};

/// Message text from `--text` or `--in`; exactly one must be given.
pub fn read_input(text: Option<&str>, path: Option<&str>) -> Result<String> {
    match (text, path) {
        (Some(t), None) => Ok(t.to_string()),
        (None, Some(p)) => read_utf8(p),
        (Some(_), Some(_)) => anyhow::bail!("give either --text or --in, not both"),
        (None, None) => anyhow::bail!("no input: pass --text or --in"),
    }
}

pub fn read_utf8(path: &str) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    String::from_utf8(bytes).with_context(|| format!("{path} is not UTF-8 text"))
}

/// Write to `path`, or to stdout with a trailing newline when `None`.
pub fn write_output(path: Option<&str>, s: &str) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, s).with_context(|| format!("write {p}")),
        None => {
            println!("{s}");
            Ok(())
        }
    }
}
