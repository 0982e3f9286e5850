use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Location of the branch-condition log written by the libaom fuzzing run.
pub const DEFAULT_INPUT: &str = "/struct_fuzz/constraint_fuzz/data/libaom/br_conds";

#[derive(Parser, Debug)]
#[command(name = "br-instr-types")]
#[command(about = "List the distinct instruction types found in branch-condition logs", long_about = None)]
pub struct Cli {
    /// Branch-condition log file, or a directory of them.
    #[arg(long, env = "BR_CONDS_PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Abort on lines that carry the prefix but too few fields.
    #[arg(long)]
    pub strict: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print how many matching lines produced each instruction type.
    #[arg(long)]
    pub counts: bool,
    /// Print a scan summary to stderr.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}
