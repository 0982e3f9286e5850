use std::collections::BTreeMap;

use anyhow::{Result, bail};

use crate::classify::{LineClass, PREFIX, TOKEN_FIELD, classify_line};
use crate::diagnostics::warning;
use crate::ir::{Warning, WarningKind};

/// Distinct instruction types with the number of lines that produced each.
///
/// Backed by a `BTreeMap`, so iteration order is already the report order.
#[derive(Debug, Default, Clone)]
pub struct TokenSet {
    counts: BTreeMap<String, usize>,
    matched_lines: usize,
    lines_scanned: usize,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &str) {
        self.matched_lines += 1;
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
        } else {
            self.counts.insert(token.to_string(), 1);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    pub fn matched_lines(&self) -> usize {
        self.matched_lines
    }

    pub fn lines_scanned(&self) -> usize {
        self.lines_scanned
    }

    pub fn sorted(&self) -> Vec<String> {
        self.counts.keys().cloned().collect()
    }

    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    pub fn into_counts(self) -> BTreeMap<String, usize> {
        self.counts
    }
}

/// Feeds every line of `contents` through the classifier into `tokens`.
///
/// `source` only labels warnings and errors. With `strict` set, the first
/// malformed line aborts; otherwise it is recorded in `warnings` and skipped.
pub fn collect_lines(
    source: &str,
    contents: &str,
    strict: bool,
    tokens: &mut TokenSet,
    warnings: &mut Vec<Warning>,
) -> Result<()> {
    for (index, line) in contents.lines().enumerate() {
        tokens.lines_scanned += 1;
        match classify_line(line) {
            LineClass::Ignored => {}
            LineClass::Token(token) => tokens.insert(token),
            LineClass::Malformed { fields } => {
                let message = format!(
                    "{source}:{}: expected at least {} fields after `{PREFIX}`, found {fields}",
                    index + 1,
                    TOKEN_FIELD + 1,
                );
                if strict {
                    bail!("malformed line at {message}");
                }
                warnings.push(warning(WarningKind::MalformedLine, message));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[Br Condition] Instruction: op1 op2 JUMP extra
[Br Condition] Instruction: op1 op2 CALL
[Br Condition] Instruction: op1 op2 JUMP other
random line
";

    #[test]
    fn deduplicates_and_counts() {
        let mut tokens = TokenSet::new();
        let mut warnings = Vec::new();
        collect_lines("sample", SAMPLE, true, &mut tokens, &mut warnings).unwrap();

        assert_eq!(tokens.sorted(), vec!["CALL", "JUMP"]);
        assert_eq!(tokens.counts()["JUMP"], 2);
        assert_eq!(tokens.counts()["CALL"], 1);
        assert_eq!(tokens.matched_lines(), 3);
        assert_eq!(tokens.lines_scanned(), 4);
        assert!(warnings.is_empty());
    }

    #[test]
    fn malformed_line_is_skipped_with_warning() {
        let contents = "[Br Condition] Instruction: a b\n[Br Condition] Instruction: a b RET\n";
        let mut tokens = TokenSet::new();
        let mut warnings = Vec::new();
        collect_lines("br_conds", contents, false, &mut tokens, &mut warnings).unwrap();

        assert_eq!(tokens.sorted(), vec!["RET"]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::MalformedLine);
        assert!(warnings[0].message.starts_with("br_conds:1:"));
        assert!(warnings[0].message.ends_with("found 2"));
    }

    #[test]
    fn malformed_line_aborts_in_strict_mode() {
        let contents = "noise\n[Br Condition] Instruction: a\n";
        let mut tokens = TokenSet::new();
        let mut warnings = Vec::new();
        let err = collect_lines("br_conds", contents, true, &mut tokens, &mut warnings)
            .unwrap_err()
            .to_string();

        assert!(err.contains("br_conds:2:"), "{err}");
        assert!(warnings.is_empty());
    }

    #[test]
    fn sorting_is_case_sensitive() {
        let contents = "\
[Br Condition] Instruction: x y br
[Br Condition] Instruction: x y Br
[Br Condition] Instruction: x y BR
";
        let mut tokens = TokenSet::new();
        let mut warnings = Vec::new();
        collect_lines("case", contents, true, &mut tokens, &mut warnings).unwrap();

        assert_eq!(tokens.sorted(), vec!["BR", "Br", "br"]);
        assert!(tokens.contains("Br"));
        assert!(!tokens.contains("bR"));
    }
}
