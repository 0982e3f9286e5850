use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputInfo {
    pub path: PathBuf,
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub version: u8,
    pub generated_at: String,
    pub input: InputInfo,
    pub files_scanned: usize,
    pub lines_scanned: usize,
    pub matched_lines: usize,
    /// Distinct instruction types, ascending.
    pub tokens: Vec<String>,
    pub counts: BTreeMap<String, usize>,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Serialize, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MalformedLine,
    IgnoredFile,
}
