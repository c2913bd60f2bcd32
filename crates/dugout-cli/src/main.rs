//! Entry point for the `dugout` console binary.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use dugout_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    dugout_cli::run(cli, stdin, &mut stdout, &mut stderr)
}
