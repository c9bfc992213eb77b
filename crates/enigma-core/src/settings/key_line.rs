// crates/enigma-core/src/settings/key_line.rs

//! Text form of a key, as an operator would read it off a daily key list:
//!
//! ```text
//! III:18:Y IV:22:T II:25:R | GK DL IY AQ FH WB TX PS OM ZU
//! ```
//!
//! Wheels are listed right, middle, left as `DESIGN:RING:POS`. DESIGN is a
//! numeral I-V or 1-5, RING is 1-26, POS is a letter or a displayed 1-26.
//! After the bar come the plugboard pairs; `-` or nothing means no cables.

use crate::error::{EnigmaError, Result};
use crate::letter::{self, ALPHABET};
use crate::settings::settings::{MachineSettings, RotorSettings};
use crate::validate::validate_settings;
use crate::wiring::design::{id_from_roman, roman_from_id};

fn key_err(msg: impl Into<String>) -> EnigmaError {
    EnigmaError::KeyLine(msg.into())
}

fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// `DESIGN:RING:POS`. Ranges are left to validation.
pub fn parse_rotor(tok: &str) -> Result<RotorSettings> {
    let parts: Vec<&str> = tok.split(':').collect();
    if parts.len() != 3 {
        return Err(key_err(format!("rotor '{tok}': expected DESIGN:RING:POS")));
    }

    let design = match id_from_roman(parts[0]) {
        Some(id) => id,
        None => parts[0]
            .parse::<u8>()
            .map_err(|_| key_err(format!("rotor '{tok}': unknown design '{}'", parts[0])))?,
    };

    let ring = parts[1]
        .parse::<u8>()
        .map_err(|_| key_err(format!("rotor '{tok}': ring '{}' is not a number", parts[1])))?;

    let pos = parts[2];
    let mut chars = pos.chars();
    let position = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => letter::to_index(c).unwrap_or(0),
        _ => {
            let shown = pos
                .parse::<u8>()
                .map_err(|_| key_err(format!("rotor '{tok}': position '{pos}' is not A-Z or 1-26")))?;
            if !(1..=ALPHABET).contains(&shown) {
                return Err(key_err(format!(
                    "rotor '{tok}': position {shown} is outside 1-26"
                )));
            }
            shown - 1
        }
    };

    Ok(RotorSettings::new(design, ring, position))
}

/// Three wheels, right first.
pub fn parse_rotors(s: &str) -> Result<[RotorSettings; 3]> {
    let parsed = tokens(s).map(parse_rotor).collect::<Result<Vec<_>>>()?;
    match parsed.as_slice() {
        [r, m, l] => Ok([*r, *m, *l]),
        _ => Err(key_err(format!(
            "expected 3 rotors (right, middle, left), got {}",
            parsed.len()
        ))),
    }
}

/// Letter pairs like `GK DL`. Duplicate letters are left to validation.
pub fn parse_plugboard(s: &str) -> Result<Vec<(u8, u8)>> {
    let s = s.trim();
    if s.is_empty() || s == "-" {
        return Ok(Vec::new());
    }

    tokens(s)
        .map(|t| {
            let letters: Vec<u8> = t.chars().filter_map(letter::to_index).collect();
            if letters.len() != 2 || t.chars().count() != 2 {
                return Err(key_err(format!("plug '{t}': expected two letters")));
            }
            Ok((letters[0], letters[1]))
        })
        .collect()
}

/// Parse a whole key line and validate it.
pub fn parse_key_line(s: &str) -> Result<MachineSettings> {
    let (rotor_part, plug_part) = match s.split_once('|') {
        Some((r, p)) => (r, p),
        None => (s, ""),
    };
    let settings = MachineSettings {
        rotors: parse_rotors(rotor_part)?,
        plugboard: parse_plugboard(plug_part)?,
    };
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn format_rotor(r: &RotorSettings) -> String {
    let design = match roman_from_id(r.design) {
        Some(n) => n.to_string(),
        None => r.design.to_string(),
    };
    format!("{}:{:02}:{}", design, r.ring, letter::to_char(r.position))
}

pub fn format_plugboard(pairs: &[(u8, u8)]) -> String {
    if pairs.is_empty() {
        return "-".to_string();
    }
    pairs
        .iter()
        .map(|&(a, b)| format!("{}{}", letter::to_char(a), letter::to_char(b)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_key_line(s: &MachineSettings) -> String {
    let rotors = s
        .rotors
        .iter()
        .map(format_rotor)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} | {}", rotors, format_plugboard(&s.plugboard))
}
