pub mod classify;
pub mod cli;
pub mod collect;
pub mod diagnostics;
pub mod ir;
pub mod report;
pub mod scan;

use std::process::ExitCode;

use anyhow::Result;
use cli::Cli;
use scan::{ScanConfig, ScanOutcome};

pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = ScanConfig {
        input: cli.input,
        strict: cli.strict,
    };

    let scanned = match scan::scan_input(&config)? {
        ScanOutcome::Missing(path) => {
            println!("Path {} does not exist.", path.display());
            return Ok(ExitCode::FAILURE);
        }
        ScanOutcome::Scanned(report) => report,
    };

    for warning in &scanned.warnings {
        eprintln!("{}", diagnostics::format_warning(warning));
    }
    if cli.verbose {
        eprintln!("{}", diagnostics::summarize(&scanned));
    }

    print!("{}", report::render(&scanned, cli.format, cli.counts)?);
    Ok(ExitCode::SUCCESS)
}
