use anyhow::Result;
use clap::Parser;

use crate::Commands;

#[derive(Parser)]
#[command(name = "skulink")]
#[command(
    about = "Convert between central inventory SKUs and sales channel SKUs",
    long_about = None
)]
pub(crate) struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    skulink::logging::init_tracing(cli.verbose);
    crate::cli_exec::handle_command(cli.command)
}
