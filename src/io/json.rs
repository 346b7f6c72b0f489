//! Field extraction from one line of a JSON document.
//!
//! Catalog files keep one `"key": value` pair per line, so lines can be
//! scanned without building a document tree. Values come back as text
//! whatever their literal type.

use serde_json::Value;

/// `(key, value)` of a `"key": value` line; `None` if the line holds no
/// scalar field (braces, brackets, blank lines, nested objects)
pub fn field_from_json_line(line: &str) -> Option<(String, String)> {
    let line = line.trim().trim_end_matches(',').trim_end();
    let (key, rest) = split_key(line)?;

    let raw = rest.trim_start().strip_prefix(':')?.trim();
    let value = match serde_json::from_str::<Value>(raw).ok()? {
        Value::String(s) => s,
        Value::Number(_) | Value::Bool(_) | Value::Null => raw.to_string(),
        Value::Array(_) | Value::Object(_) => return None,
    };
    Some((key, value))
}

/// Value of a `"key": value` line as text, regardless of its JSON type
pub fn value_from_json_line(line: &str) -> Option<String> {
    field_from_json_line(line).map(|(_, value)| value)
}

/// Split off the leading quoted key, honouring escaped quotes
fn split_key(line: &str) -> Option<(String, &str)> {
    if !line.starts_with('"') {
        return None;
    }
    let mut escaped = false;
    for (i, c) in line.char_indices().skip(1) {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => {
                let key: String = serde_json::from_str(&line[..=i]).ok()?;
                return Some((key, &line[i + 1..]));
            }
            _ => escaped = false,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_text_for_any_scalar_type() {
        assert_eq!(value_from_json_line(r#"  "a": 1.00000261,"#).as_deref(), Some("1.00000261"));
        assert_eq!(value_from_json_line(r#""e": -3.2e-5"#).as_deref(), Some("-3.2e-5"));
        assert_eq!(value_from_json_line(r#""ok": true,"#).as_deref(), Some("true"));
        assert_eq!(value_from_json_line(r#""name": "Earth","#).as_deref(), Some("Earth"));
        assert_eq!(value_from_json_line(r#""x": null"#).as_deref(), Some("null"));
    }

    #[test]
    fn unescapes_strings_and_keys() {
        let (key, value) = field_from_json_line(r#""say \"hi\"": "a: \"b\"","#).unwrap();
        assert_eq!(key, r#"say "hi""#);
        assert_eq!(value, r#"a: "b""#);
    }

    #[test]
    fn skips_structural_lines() {
        assert_eq!(value_from_json_line("{"), None);
        assert_eq!(value_from_json_line("  },"), None);
        assert_eq!(value_from_json_line(""), None);
        assert_eq!(value_from_json_line(r#""planets": ["#), None);
        assert_eq!(value_from_json_line(r#""pos": [1, 2]"#), None);
    }
}
