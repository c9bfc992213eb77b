use clap::{Args, Subcommand};
use enigma_core::settings::key_line::format_key_line;
use enigma_core::wiring::design::lookup;
use enigma_core::MachineSettings;

use crate::cmd::key::SettingsArgs;

#[derive(Args)]
pub struct SettingsCmdArgs {
    #[command(subcommand)]
    pub cmd: SettingsCmd,
}

#[derive(Subcommand)]
pub enum SettingsCmd {
    /// Print the resolved key (key line, wheel details, diagnostics)
    Show {
        #[command(flatten)]
        key: SettingsArgs,
    },

    /// Print the resolved key as one line
    Key {
        #[command(flatten)]
        key: SettingsArgs,
    },
}

pub fn run(args: SettingsCmdArgs) -> anyhow::Result<()> {
    match args.cmd {
        SettingsCmd::Show { key } => {
            let (s, source) = key.resolve()?;
            show(&s, source)
        }
        SettingsCmd::Key { key } => {
            let (s, _) = key.resolve()?;
            println!("{}", format_key_line(&s));
            Ok(())
        }
    }
}

fn show(s: &MachineSettings, source: &str) -> anyhow::Result<()> {
    println!("--- key ---");
    println!("key          = {}", format_key_line(s));
    println!("source       = {}", source);

    for (slot, r) in ["right", "middle", "left"].iter().zip(s.rotors.iter()) {
        let d = lookup(r.design)?;
        println!(
            "{:<6} rotor = {} ring={} position={} notch={}",
            slot,
            d.roman(),
            r.ring,
            r.position,
            d.notch()
        );
    }
    println!("plug pairs   = {}", s.plugboard.len());

    println!();
    println!("--- diagnostics ---");
    diagnostics(s);
    Ok(())
}

fn diagnostics(s: &MachineSettings) {
    if s.plugboard.is_empty() {
        println!("WARN: no plugboard cables. Key space is wheel order and settings only.");
    }

    // One short of its notch, the middle wheel carries the left wheel along
    // at the first right-wheel turnover.
    let middle = s.middle();
    if let Ok(d) = lookup(middle.design) {
        if (middle.position + 1) % 26 == d.notch() {
            println!(
                "NOTE: middle rotor {} starts one short of its notch ({}); the left rotor steps at the first turnover.",
                d.roman(),
                d.notch()
            );
        }
    }
}
