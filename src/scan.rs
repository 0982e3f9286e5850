use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use walkdir::WalkDir;

use crate::collect::{TokenSet, collect_lines};
use crate::diagnostics::warning;
use crate::ir::{InputInfo, Report, Warning, WarningKind};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub input: PathBuf,
    pub strict: bool,
}

#[derive(Debug)]
pub enum ScanOutcome {
    /// The input path does not exist; nothing was read.
    Missing(PathBuf),
    Scanned(Report),
}

pub fn scan_input(config: &ScanConfig) -> Result<ScanOutcome> {
    if !config.input.exists() {
        return Ok(ScanOutcome::Missing(config.input.clone()));
    }

    let mut warnings: Vec<Warning> = Vec::new();
    let mut tokens = TokenSet::new();

    let files = input_files(&config.input)?;
    if files.is_empty() {
        if config.strict {
            bail!("no log files found in {}", config.input.display());
        }
        warnings.push(warning(
            WarningKind::IgnoredFile,
            format!("no log files found in {}", config.input.display()),
        ));
    }

    for path in &files {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let source = path.display().to_string();
        collect_lines(&source, &contents, config.strict, &mut tokens, &mut warnings)?;
    }

    let lines_scanned = tokens.lines_scanned();
    let matched_lines = tokens.matched_lines();
    let sorted = tokens.sorted();

    Ok(ScanOutcome::Scanned(Report {
        version: 1,
        generated_at: now_rfc3339(),
        input: InputInfo {
            path: config.input.clone(),
            strict: config.strict,
        },
        files_scanned: files.len(),
        lines_scanned,
        matched_lines,
        tokens: sorted,
        counts: tokens.into_counts(),
        warnings,
    }))
}

fn input_files(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(input).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", input.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
