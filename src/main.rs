use std::process::ExitCode;

use br_instr_types::cli::Cli;
use br_instr_types::run;
use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    run(cli)
}
