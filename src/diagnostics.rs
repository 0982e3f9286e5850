use crate::ir::{Report, Warning, WarningKind};

pub fn warning(kind: WarningKind, message: impl Into<String>) -> Warning {
    Warning {
        kind,
        message: message.into(),
    }
}

pub fn format_warning(warning: &Warning) -> String {
    format!("warning: [{}] {}", format_kind(&warning.kind), warning.message)
}

pub fn summarize(report: &Report) -> String {
    let mut output = String::new();
    output.push_str(&format!("Input: {}\n", report.input.path.display()));
    output.push_str(&format!("Files scanned: {}\n", report.files_scanned));
    output.push_str(&format!("Lines scanned: {}\n", report.lines_scanned));
    output.push_str(&format!("Matching lines: {}\n", report.matched_lines));
    output.push_str(&format!("Instruction types: {}\n", report.tokens.len()));
    output.push_str(&format!("Warnings: {}\n", report.warnings.len()));

    output.trim_end().to_string()
}

fn format_kind(kind: &WarningKind) -> &'static str {
    match kind {
        WarningKind::MalformedLine => "malformed_line",
        WarningKind::IgnoredFile => "ignored_file",
    }
}
