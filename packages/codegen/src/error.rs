use thiserror::Error;

/// Failures that cross a generator's boundary. Circular references and
/// depth/visit limits are expected control outcomes and never surface
/// here; they degrade to `null` / name-only references instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Generation timeout after {0} ms")]
    Timeout(u64),
}

pub type GenerateResult<T> = Result<T, GenerateError>;

/// Make a message safe to embed inside a JSON string literal: escape
/// quotes and backslashes, collapse newlines and tabs to spaces.
pub fn sanitize_json_message(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' | '\r' | '\t' => out.push(' '),
            other => out.push(other),
        }
    }
    out.trim().to_string()
}

/// Make a message safe for a single-line code comment: break up comment
/// terminators and collapse newlines and tabs to spaces.
pub fn sanitize_comment(message: &str) -> String {
    message
        .replace("*/", "* /")
        .replace(['\n', '\r', '\t'], " ")
        .trim()
        .to_string()
}
