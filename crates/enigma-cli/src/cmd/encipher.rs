use clap::Args;
use enigma_core::settings::key_line::format_key_line;
use enigma_core::CipherEngine;

use crate::cmd::key::SettingsArgs;
use crate::io::text;

#[derive(Args)]
pub struct EncipherArgs {
    /// Message text
    #[arg(long, conflicts_with = "in")]
    pub text: Option<String>,

    /// Message file (UTF-8)
    #[arg(long)]
    pub r#in: Option<String>,

    /// Output path. If omitted, writes to stdout.
    #[arg(long)]
    pub out: Option<String>,

    #[command(flatten)]
    pub key: SettingsArgs,
}

pub fn run(args: EncipherArgs) -> anyhow::Result<()> {
    // Key first: a bad key fails before any input is read.
    let (settings, source) = args.key.resolve()?;
    let input = text::read_input(args.text.as_deref(), args.r#in.as_deref())?;

    let mut engine = CipherEngine::new(&settings)?;
    let output = engine.process(&input);
    text::write_output(args.out.as_deref(), &output)?;

    eprintln!(
        "encipher ok: chars={} keystrokes={} passthrough={} middle_steps={} left_steps={} source={} key=\"{}\"",
        input.chars().count(),
        engine.stats.keystrokes,
        engine.stats.passthrough,
        engine.stats.middle_steps,
        engine.stats.left_steps,
        source,
        format_key_line(&settings)
    );

    Ok(())
}
