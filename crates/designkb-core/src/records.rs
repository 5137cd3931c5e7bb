//! Utilities for records output format

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Collapse all whitespace runs (including newlines) to single spaces so a
/// value fits on one record line.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join values as CSV, or `-` when there are none
pub fn csv_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi""#), r#"say \"hi\""#);
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\n  b\tc "), "a b c");
    }

    #[test]
    fn test_csv_or_dash() {
        assert_eq!(csv_or_dash(&[]), "-");
        assert_eq!(
            csv_or_dash(&["blur".to_string(), "glass".to_string()]),
            "blur,glass"
        );
    }
}
