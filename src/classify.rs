/// Marker written by the branch instrumentation in front of every condition record.
pub const PREFIX: &str = "[Br Condition] Instruction:";

/// Zero-based index of the instruction type among the fields after [`PREFIX`].
pub const TOKEN_FIELD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// The line does not start with [`PREFIX`].
    Ignored,
    Token(&'a str),
    /// The prefix matched but only `fields` fields follow it.
    Malformed { fields: usize },
}

pub fn classify_line(line: &str) -> LineClass<'_> {
    let Some(rest) = line.strip_prefix(PREFIX) else {
        return LineClass::Ignored;
    };

    let mut fields = rest.split_whitespace();
    match fields.nth(TOKEN_FIELD) {
        Some(token) => LineClass::Token(token),
        None => LineClass::Malformed {
            fields: rest.split_whitespace().count(),
        },
    }
}
