// crates/enigma-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "enigma-cli")]
#[command(about = "Enigma I cipher machine CLI", long_about = None)]
pub struct Cli {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encipher or decipher text (the machine is its own inverse)
    Encipher(cmd::encipher::EncipherArgs),

    /// Encipher and print wheel positions for every keystroke
    Trace(cmd::trace::TraceArgs),

    /// Key tools: show the resolved key, print it as one line
    Settings(cmd::settings::SettingsCmdArgs),
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.cmd {
        Commands::Encipher(args) => cmd::encipher::run(args),
        Commands::Trace(args) => cmd::trace::run(args),
        Commands::Settings(args) => cmd::settings::run(args),
    }
}
