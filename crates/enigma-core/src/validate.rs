use crate::error::Result;
use crate::settings::settings::MachineSettings;

/// Surface every configuration error before a single letter is enciphered.
///
/// Order: per-wheel ranges (right, middle, left), duplicate wheels, then
/// the plugboard.
pub fn validate_settings(s: &MachineSettings) -> Result<()> {
    s.build_bank()?;
    s.build_plugboard()?;
    Ok(())
}
