use std::process::ExitCode;

use clap::Parser;
use langpay::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cli.run()
}
