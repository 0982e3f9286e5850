use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::ir::Report;

pub const HEADER: &str = "Unique instruction types found:";
pub const SEPARATOR: &str = "=================================";

pub fn render(report: &Report, format: OutputFormat, counts: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, counts)),
        OutputFormat::Json => {
            let mut output =
                serde_json::to_string_pretty(report).context("failed to serialize report")?;
            output.push('\n');
            Ok(output)
        }
        OutputFormat::Yaml => {
            serde_yaml_bw::to_string(report).context("failed to serialize report")
        }
    }
}

pub fn render_text(report: &Report, counts: bool) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');
    output.push_str(SEPARATOR);
    output.push('\n');
    for token in &report.tokens {
        output.push_str(token);
        if counts {
            let count = report.counts.get(token).copied().unwrap_or_default();
            output.push_str(&format!(" {count}"));
        }
        output.push('\n');
    }
    output
}
