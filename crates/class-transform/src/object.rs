use tracing::debug;

use crate::token::{string_form_for, ClassBinding, ClassToken, SurfaceForm};

/// Opening marker of an object-form binding.
pub const OBJECT_OPEN: &str = ":class=\"{";
/// Closing marker of an object-form binding.
pub const OBJECT_CLOSE: &str = "}\"";

/// Convert an object-form binding into a class string or template literal.
///
/// `` :class="{ 'a': true, [`${b}`]: true }" `` → `` :class="`a ${b}`" ``
pub fn object_to_string(object_text: &str) -> String {
    let tokens = parse_object_entries(object_text);
    render_string_form(&tokens)
}

/// Print tokens as `class="..."`, or as a template literal when any token is dynamic.
///
/// Dynamic texts are printed bare; they are expected to carry their own `${...}`.
pub fn render_string_form(tokens: &[ClassToken]) -> String {
    let joined = tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    match string_form_for(tokens) {
        SurfaceForm::TemplateForm => format!(":class=\"`{joined}`\""),
        _ => format!("class=\"{joined}\""),
    }
}

/// Parse the entries of an object-form binding.
///
/// Recognized entries (the value must be `true`):
/// - `'name': true` → static
/// - `['name']: true` → static
/// - `` [`expr`]: true `` → dynamic
///
/// Anything else is skipped.
pub fn parse_object_entries(object_text: &str) -> ClassBinding {
    split_entries(object_body(object_text))
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let token = parse_entry(entry);
            if token.is_none() {
                debug!(entry, "skipping unrecognized class entry");
            }
            token
        })
        .collect()
}

/// Strip `:class="{` and `}"` (with surrounding whitespace) from the binding text.
fn object_body(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix(OBJECT_OPEN).unwrap_or(text);
    let text = text
        .strip_suffix(OBJECT_CLOSE)
        .or_else(|| text.find(OBJECT_CLOSE).map(|i| &text[..i]))
        .unwrap_or(text);
    text.trim()
}

/// Split an object body on top-level commas.
///
/// Commas inside quotes, template literals, brackets or `${...}` stay put.
fn split_entries(body: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut in_backtick = false;
    let mut start = 0;

    for (i, ch) in body.char_indices() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' if !in_backtick => quote = Some(ch),
            '`' => in_backtick = !in_backtick,
            '[' | '{' | '(' => depth += 1,
            ']' | '}' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 && !in_backtick => {
                result.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    result.push(&body[start..]);
    result
}

fn parse_entry(entry: &str) -> Option<ClassToken> {
    let (token, rest) = if let Some(after) = entry.strip_prefix("[`") {
        let end = after.rfind("`]")?;
        (ClassToken::dynamic(&after[..end])?, &after[end + 2..])
    } else if let Some(after) = entry.strip_prefix('[') {
        let (name, rest) = quoted_name(after.trim_start())?;
        let rest = rest.trim_start().strip_prefix(']')?;
        (ClassToken::static_class(name)?, rest)
    } else {
        let (name, rest) = quoted_name(entry)?;
        (ClassToken::static_class(name)?, rest)
    };

    let value = rest.trim_start().strip_prefix(':')?.trim();
    (value == "true").then_some(token)
}

/// Read `'name'` from the start of `s`, returning the name and the remainder.
fn quoted_name(s: &str) -> Option<(&str, &str)> {
    let after = s.strip_prefix('\'')?;
    let end = after.find('\'')?;
    Some((&after[..end], &after[end + 1..]))
}
