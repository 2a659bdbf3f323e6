use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::document::{Document, Position, SourceRange, TextEdit};
use crate::error::TransformError;
use crate::locate::locate_object_binding;
use crate::object::{object_to_string, OBJECT_OPEN};
use crate::split::is_template_literal;
use crate::string::string_to_object;
use crate::token::SurfaceForm;

/// First `class="..."` or `:class="..."` attribute on a line, colon included.
static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#":?class="[^"]*""#).unwrap());

/// Which way a transform goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// An object-form binding surrounds the cursor.
    Object,
    /// A string or template binding sits on `line`.
    String { line: usize, form: SurfaceForm },
    Unresolved,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Object => f.write_str("object"),
            Mode::String { line, form } => {
                let name = match form {
                    SurfaceForm::TemplateForm => "template",
                    _ => "string",
                };
                write!(f, "{name} (line {})", line + 1)
            }
            Mode::Unresolved => f.write_str("none"),
        }
    }
}

/// Decide the transform direction from the cursor line, walking upward
/// to line 0 until a line carries a class binding.
pub fn detect_mode(doc: &impl Document, cursor_line: usize) -> Mode {
    let last = cursor_line.min(doc.line_count().saturating_sub(1));
    (0..=last)
        .rev()
        .find_map(|line| classify_line(doc.line_text(line)?, line))
        .unwrap_or(Mode::Unresolved)
}

fn classify_line(text: &str, line: usize) -> Option<Mode> {
    match line_form(text)? {
        SurfaceForm::ObjectForm => Some(Mode::Object),
        form => Some(Mode::String { line, form }),
    }
}

/// The form of the class binding a single line carries, if any.
///
/// A `class="` whose value does not close on the line counts as string form.
pub fn line_form(text: &str) -> Option<SurfaceForm> {
    if text.contains(OBJECT_OPEN) {
        return Some(SurfaceForm::ObjectForm);
    }
    if !text.contains("class=\"") {
        return None;
    }
    let template = CLASS_ATTR.find(text).is_some_and(|found| {
        let attr = found.as_str();
        let value = &attr[attr.find('"').map_or(0, |i| i + 1)..attr.len() - 1];
        is_template_literal(value)
    });
    Some(if template {
        SurfaceForm::TemplateForm
    } else {
        SurfaceForm::StringForm
    })
}

/// Compute the edit that flips the class binding around `cursor_line`.
///
/// The document is only read; see [`apply_transform`] to also apply it.
pub fn transform(doc: &impl Document, cursor_line: usize) -> Result<TextEdit, TransformError> {
    if cursor_line >= doc.line_count() {
        return Err(TransformError::NoActiveEditor);
    }

    let mode = detect_mode(doc, cursor_line);
    debug!(%mode, cursor_line, "detected class binding");

    match mode {
        Mode::Object => object_edit(doc, cursor_line),
        Mode::String { line, .. } => string_edit(doc, line),
        Mode::Unresolved => Err(TransformError::UnrecognizedFormat),
    }
}

/// Compute the edit for `cursor_line` and apply it to `doc`.
pub fn apply_transform(
    doc: &mut impl Document,
    cursor_line: usize,
) -> Result<TextEdit, TransformError> {
    let edit = transform(doc, cursor_line)?;
    doc.replace(&edit.range, &edit.new_text)?;
    Ok(edit)
}

fn object_edit(doc: &impl Document, cursor_line: usize) -> Result<TextEdit, TransformError> {
    let range =
        locate_object_binding(doc, cursor_line).ok_or(TransformError::MalformedBinding)?;
    let text = doc
        .text_in_range(&range)
        .ok_or(TransformError::MalformedBinding)?;
    Ok(TextEdit {
        range,
        new_text: object_to_string(&text),
    })
}

fn string_edit(doc: &impl Document, line: usize) -> Result<TextEdit, TransformError> {
    let text = doc.line_text(line).ok_or(TransformError::NoActiveEditor)?;
    // `class="` without a closing quote on the same line is not handled.
    let found = CLASS_ATTR
        .find(text)
        .ok_or(TransformError::UnrecognizedFormat)?;
    Ok(TextEdit {
        range: SourceRange::new(
            Position::new(line, found.start()),
            Position::new(line, found.end()),
        ),
        new_text: string_to_object(found.as_str()),
    })
}
