use clap::Args;
use enigma_core::letter::to_char;
use enigma_core::settings::key_line::format_key_line;
use enigma_core::CipherEngine;

use crate::cmd::key::SettingsArgs;
use crate::io::text;

#[derive(Args)]
pub struct TraceArgs {
    /// Message text
    #[arg(long, conflicts_with = "in")]
    pub text: Option<String>,

    /// Message file (UTF-8)
    #[arg(long)]
    pub r#in: Option<String>,

    /// Show positions as letters instead of 0-25
    #[arg(long, default_value_t = false)]
    pub letters: bool,

    #[command(flatten)]
    pub key: SettingsArgs,
}

pub fn run(args: TraceArgs) -> anyhow::Result<()> {
    let (settings, _) = args.key.resolve()?;
    let input = text::read_input(args.text.as_deref(), args.r#in.as_deref())?;

    let mut engine = CipherEngine::new(&settings)?;
    let start = engine.positions();
    let (output, keys) = engine.process_traced(&input);

    println!("key       = {}", format_key_line(&settings));
    println!("start     = {}", fmt_positions(start, args.letters));
    for (n, k) in keys.iter().enumerate() {
        let mut line = format!(
            "{:>5} {}->{} positions={}",
            n + 1,
            to_char(k.input),
            to_char(k.output),
            fmt_positions(k.positions, args.letters)
        );
        if k.outcome.middle_stepped {
            line.push_str(" [middle]");
        }
        if k.outcome.left_stepped {
            line.push_str(" [left]");
        }
        println!("{line}");
    }
    println!("output    = {output}");

    Ok(())
}

// right, middle, left
fn fmt_positions(p: [u8; 3], letters: bool) -> String {
    if letters {
        format!("{},{},{}", to_char(p[0]), to_char(p[1]), to_char(p[2]))
    } else {
        format!("{},{},{}", p[0], p[1], p[2])
    }
}
