//! Indentation-only JSON reformatter.
//!
//! The JSON generator emits compact output; this pass re-indents it from
//! brace/bracket nesting alone. String literals are tracked with an
//! in-string flag (toggled by unescaped `"`) and an escape flag (toggled
//! by `\`) so structural characters inside string values are left
//! untouched.

const INDENT: &str = "  ";

pub fn pretty_print(json: &str) -> String {
    let chars: Vec<char> = json.chars().collect();
    let mut out = String::with_capacity(json.len() * 2);
    let mut level = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
        } else {
            match c {
                '{' | '[' => {
                    // Empty containers stay on one line.
                    let close = if c == '{' { '}' } else { ']' };
                    if let Some(j) = next_non_whitespace(&chars, i + 1) {
                        if chars[j] == close {
                            out.push(c);
                            out.push(close);
                            i = j + 1;
                            continue;
                        }
                    }
                    out.push(c);
                    out.push('\n');
                    level += 1;
                    push_indent(&mut out, level);
                }
                '}' | ']' => {
                    out.push('\n');
                    level = level.saturating_sub(1);
                    push_indent(&mut out, level);
                    out.push(c);
                }
                ',' => {
                    out.push(c);
                    out.push('\n');
                    push_indent(&mut out, level);
                }
                ':' => {
                    out.push(c);
                    out.push(' ');
                }
                ' ' | '\n' | '\t' | '\r' => {}
                _ => out.push(c),
            }
        }

        if c == '"' && !escaped {
            in_string = !in_string;
        }
        escaped = c == '\\' && !escaped;
        i += 1;
    }

    out
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

fn next_non_whitespace(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len()).find(|&i| !chars[i].is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_prints_nested_objects() {
        let out = pretty_print(r#"{"a": 1, "b": {"c": [1, 2]}}"#);
        assert_eq!(
            out,
            "{\n  \"a\": 1,\n  \"b\": {\n    \"c\": [\n      1,\n      2\n    ]\n  }\n}"
        );
    }

    #[test]
    fn test_structural_chars_inside_strings_are_preserved() {
        let out = pretty_print(r#"{"text": "a, b: {c} [d]"}"#);
        assert!(out.contains(r#""a, b: {c} [d]""#));
    }

    #[test]
    fn test_escaped_quotes_do_not_end_strings() {
        let out = pretty_print(r#"{"text": "she said \"hi, there\""}"#);
        assert!(out.contains(r#"she said \"hi, there\""#));
    }

    #[test]
    fn test_empty_containers_stay_inline() {
        assert_eq!(pretty_print("{}"), "{}");
        assert_eq!(pretty_print(r#"{"a": [], "b": {}}"#), "{\n  \"a\": [],\n  \"b\": {}\n}");
    }

    #[test]
    fn test_reformat_is_idempotent_on_own_output() {
        let once = pretty_print(r#"{"a": [1, {"b": "x"}]}"#);
        let twice = pretty_print(&once);
        assert_eq!(once, twice);
    }
}
