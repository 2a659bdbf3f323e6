use crate::split::{is_template_literal, split_class_value};
use crate::token::{ClassBinding, ClassToken};

/// Convert a `class="..."` or `:class="..."` attribute into object form.
///
/// `class="foo bar"` → `:class="{ 'foo': true, 'bar': true }"`
pub fn string_to_object(attribute: &str) -> String {
    let value = attribute_value(attribute);
    let tokens = parse_class_value(value, is_template_literal(value));
    render_object_form(&tokens)
}

/// Print tokens as an object-form binding.
pub fn render_object_form(tokens: &[ClassToken]) -> String {
    let entries = tokens
        .iter()
        .map(|t| {
            if t.is_dynamic() {
                format!("[`{}`]: true", t.text)
            } else {
                format!("'{}': true", t.text)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!(":class=\"{{ {entries} }}\"")
}

/// Parse the content of a class attribute (without quotes) into tokens.
///
/// With `template` set the whole value is one backtick-delimited
/// template; otherwise backtick-delimited tokens inside the value are
/// expanded the same way. Inside a template, every piece holding a `${`
/// is dynamic.
pub fn parse_class_value(value: &str, template: bool) -> ClassBinding {
    if template {
        return parse_template(value);
    }
    split_class_value(value)
        .iter()
        .flat_map(|part| {
            if is_template_literal(part) {
                parse_template(part)
            } else {
                ClassToken::static_class(part).into_iter().collect()
            }
        })
        .collect()
}

fn parse_template(literal: &str) -> ClassBinding {
    let inner = literal
        .strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
        .unwrap_or(literal);
    split_class_value(inner)
        .iter()
        .filter_map(|part| {
            if part.contains("${") {
                ClassToken::dynamic(part)
            } else {
                ClassToken::static_class(part)
            }
        })
        .collect()
}

/// Strip the `class="` / `:class="` prefix and the closing `"`.
fn attribute_value(attribute: &str) -> &str {
    let value = attribute.trim();
    let value = value
        .strip_prefix(":class=\"")
        .or_else(|| value.strip_prefix("class=\""))
        .unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
