// crates/enigma-cli/src/cmd/key.rs

use anyhow::Context;
use clap::Args;
use enigma_core::settings::defaults::default_settings;
use enigma_core::settings::key_line;
use enigma_core::validate::validate_settings;
use enigma_core::MachineSettings;
use tracing::info;

/// Where the machine key comes from. Shared by every command that ciphers.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Whole key as one line, e.g. "III:18:Y IV:22:T II:25:R | GK DL IY".
    /// Overrides everything else.
    #[arg(long)]
    pub key: Option<String>,

    /// Override wheels, right to left: "DESIGN:RING:POS DESIGN:RING:POS DESIGN:RING:POS"
    #[arg(long)]
    pub rotors: Option<String>,

    /// Override plugboard: letter pairs like "GK DL IY", or "-" for none
    #[arg(long)]
    pub plugs: Option<String>,
}

impl SettingsArgs {
    /// Precedence:
    /// 1) --key (whole key)
    /// 2) the built-in default key
    /// 3) --rotors / --plugs override their part of (2)
    pub fn resolve(&self) -> anyhow::Result<(MachineSettings, &'static str)> {
        if let Some(k) = self.key.as_deref() {
            let s = key_line::parse_key_line(k).context("parse --key")?;
            return Ok((s, "key"));
        }

        let mut s = default_settings();
        let mut source = "default";

        if let Some(r) = self.rotors.as_deref() {
            s.rotors = key_line::parse_rotors(r).context("parse --rotors")?;
            source = "custom";
        }
        if let Some(p) = self.plugs.as_deref() {
            s.plugboard = key_line::parse_plugboard(p).context("parse --plugs")?;
            source = "custom";
        }

        validate_settings(&s).context("validate settings")?;
        info!(source, key = %key_line::format_key_line(&s), "settings resolved");
        Ok((s, source))
    }
}
