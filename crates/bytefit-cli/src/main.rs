// crates/bytefit-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "bytefit-cli")]
#[command(about = "bytefit: brute-force binary encoding inference", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the full hypothesis space for scale laws
    Solve(cmd::solve::SolveArgs),

    /// Apply one explicit hypothesis and print the extracted readings
    Readings(cmd::readings::ReadingsArgs),

    /// Re-verify a hypothesis + scale law against samples
    Check(cmd::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Solve(args) => cmd::solve::run(args),
        Commands::Readings(args) => cmd::readings::run(args),
        Commands::Check(args) => cmd::check::run(args),
    }
}
