/// Split a class value into tokens on spaces, keeping template literals and
/// `${...}` fragments whole.
///
/// A space only separates tokens outside backticks and outside any `${`.
/// Tokens are trimmed and blanks dropped. An unterminated backtick or `${`
/// just swallows the rest of the input into the last token.
pub fn split_class_value(value: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_backtick = false;
    let mut depth = 0usize;
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '`' => {
                in_backtick = !in_backtick;
                current.push(ch);
            }
            '$' if chars.peek() == Some(&'{') => {
                chars.next();
                depth += 1;
                current.push_str("${");
            }
            '}' if depth > 0 => {
                depth -= 1;
                current.push(ch);
            }
            ' ' if !in_backtick && depth == 0 => flush(&mut parts, &mut current),
            _ => current.push(ch),
        }
    }
    flush(&mut parts, &mut current);

    parts
}

fn flush(parts: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
    current.clear();
}

/// Whether `token` is a single backtick-delimited template literal.
pub(crate) fn is_template_literal(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('`') && token.ends_with('`')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        assert_eq!(split_class_value("foo bar baz"), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_split_collapses_extra_spaces() {
        assert_eq!(split_class_value("  foo    bar "), vec!["foo", "bar"]);
        assert!(split_class_value("   ").is_empty());
        assert!(split_class_value("").is_empty());
    }

    #[test]
    fn test_split_keeps_interpolation_whole() {
        assert_eq!(
            split_class_value("a ${b + c} d"),
            vec!["a", "${b + c}", "d"]
        );
    }

    #[test]
    fn test_split_keeps_template_literal_whole() {
        assert_eq!(
            split_class_value("foo `bar ${x ? 'y' : 'z'}` qux"),
            vec!["foo", "`bar ${x ? 'y' : 'z'}`", "qux"]
        );
    }

    #[test]
    fn test_split_nested_interpolation() {
        assert_eq!(
            split_class_value("${a ? `x ${b}` : 'c d'} e"),
            vec!["${a ? `x ${b}` : 'c d'}", "e"]
        );
    }

    #[test]
    fn test_split_unterminated_is_lenient() {
        assert_eq!(split_class_value("a `b c"), vec!["a", "`b c"]);
        assert_eq!(split_class_value("a ${b c"), vec!["a", "${b c"]);
    }

    #[test]
    fn test_is_template_literal() {
        assert!(is_template_literal("`a ${b}`"));
        assert!(is_template_literal("``"));
        assert!(!is_template_literal("`"));
        assert!(!is_template_literal("`a"));
        assert!(!is_template_literal("a"));
    }
}
