use tracing::trace;

use crate::document::{Document, Position, SourceRange};
use crate::object::{OBJECT_CLOSE, OBJECT_OPEN};

/// Find the object-form binding around `cursor_line`.
///
/// Scans up from the cursor line (inclusive) for `:class="{`, then down from
/// the cursor line (inclusive) for `}"`. On the line holding the open marker
/// only text after it is searched for the close marker. Returns `None` when
/// either marker is missing.
pub fn locate_object_binding(doc: &impl Document, cursor_line: usize) -> Option<SourceRange> {
    let line_count = doc.line_count();
    if cursor_line >= line_count {
        return None;
    }

    let start = (0..=cursor_line).rev().find_map(|line| {
        let text = doc.line_text(line)?;
        trace!(line, "scanning for object open marker");
        text.find(OBJECT_OPEN).map(|column| Position::new(line, column))
    })?;

    let end = (cursor_line..line_count).find_map(|line| {
        let text = doc.line_text(line)?;
        trace!(line, "scanning for object close marker");
        let from = if line == start.line {
            start.column + OBJECT_OPEN.len()
        } else {
            0
        };
        text[from..]
            .find(OBJECT_CLOSE)
            .map(|offset| Position::new(line, from + offset + OBJECT_CLOSE.len()))
    })?;

    Some(SourceRange::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;

    #[test]
    fn test_locate_multi_line() {
        let doc = TextDocument::new("<div :class=\"{\n  'active': true\n}\">");
        let range = locate_object_binding(&doc, 1).unwrap();
        assert_eq!(range.start, Position::new(0, 5));
        assert_eq!(range.end, Position::new(2, 2));
    }

    #[test]
    fn test_locate_single_line() {
        let doc = TextDocument::new("<a :class=\"{ 'x': true }\">link</a>");
        let range = locate_object_binding(&doc, 0).unwrap();
        assert_eq!(range.start, Position::new(0, 3));
        assert_eq!(range.end, Position::new(0, 25));
        assert_eq!(
            doc.text_in_range(&range).unwrap(),
            ":class=\"{ 'x': true }\""
        );
    }

    #[test]
    fn test_close_before_open_on_same_line_ignored() {
        let doc = TextDocument::new("<a :style=\"{}\" :class=\"{ 'x': true }\">");
        let range = locate_object_binding(&doc, 0).unwrap();
        assert_eq!(
            doc.text_in_range(&range).unwrap(),
            ":class=\"{ 'x': true }\""
        );
    }

    #[test]
    fn test_down_scan_starts_at_cursor() {
        let doc = TextDocument::new(
            "<div :class=\"{\n  'a': true,\n  'b': true\n}\">",
        );
        let range = locate_object_binding(&doc, 3).unwrap();
        assert_eq!(range.start, Position::new(0, 5));
        assert_eq!(range.end, Position::new(3, 2));
    }

    #[test]
    fn test_missing_close() {
        let doc = TextDocument::new("<div :class=\"{\n  'a': true\n>");
        assert!(locate_object_binding(&doc, 1).is_none());
    }

    #[test]
    fn test_missing_open() {
        let doc = TextDocument::new("<div>\n  'a': true\n}\">");
        assert!(locate_object_binding(&doc, 1).is_none());
    }

    #[test]
    fn test_cursor_outside_document() {
        let doc = TextDocument::new("<div :class=\"{ 'a': true }\">");
        assert!(locate_object_binding(&doc, 5).is_none());
    }
}
