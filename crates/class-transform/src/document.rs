use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// A zero-based line and byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// An end-exclusive span of document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}

impl SourceRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}

/// A replacement computed by a transform, ready to hand to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: SourceRange,
    #[serde(rename = "newText")]
    pub new_text: String,
}

/// The host document as seen by the transformer.
pub trait Document {
    fn line_count(&self) -> usize;

    fn line_text(&self, line: usize) -> Option<&str>;

    /// Text covered by `range`, each line followed by its own ending.
    fn text_in_range(&self, range: &SourceRange) -> Option<String>;

    /// Replace `range` with `new_text` as one edit.
    fn replace(&mut self, range: &SourceRange, new_text: &str) -> Result<(), TransformError>;
}

/// One line of a [`TextDocument`] with the terminator that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    /// `"\r\n"`, `"\n"`, or `""` for the last line.
    eol: &'static str,
}

/// An in-memory document split into lines.
///
/// Every line keeps its own terminator, so an untouched document prints back
/// byte for byte even with mixed line endings. A trailing newline shows up as
/// a final empty line; empty text has no lines at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<Line>,
}

impl TextDocument {
    pub fn new(text: &str) -> Self {
        Self {
            lines: split_lines(text),
        }
    }

    fn check_range(&self, range: &SourceRange) -> Result<(), TransformError> {
        let fits = |pos: Position| {
            self.lines
                .get(pos.line)
                .is_some_and(|line| line.text.is_char_boundary(pos.column))
        };
        if range.start <= range.end && fits(range.start) && fits(range.end) {
            Ok(())
        } else {
            Err(TransformError::RangeOutOfBounds(range.to_string()))
        }
    }
}

impl fmt::Display for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(&line.text)?;
            f.write_str(line.eol)?;
        }
        Ok(())
    }
}

impl Document for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(|l| l.text.as_str())
    }

    fn text_in_range(&self, range: &SourceRange) -> Option<String> {
        self.check_range(range).ok()?;
        let (start, end) = (range.start, range.end);
        if start.line == end.line {
            return Some(self.lines[start.line].text[start.column..end.column].to_string());
        }
        let first = &self.lines[start.line];
        let mut text = String::from(&first.text[start.column..]);
        text.push_str(first.eol);
        for line in &self.lines[start.line + 1..end.line] {
            text.push_str(&line.text);
            text.push_str(line.eol);
        }
        text.push_str(&self.lines[end.line].text[..end.column]);
        Some(text)
    }

    fn replace(&mut self, range: &SourceRange, new_text: &str) -> Result<(), TransformError> {
        self.check_range(range)?;
        let (start, end) = (range.start, range.end);
        let first_eol = self.lines[start.line].eol;
        let last_eol = self.lines[end.line].eol;

        let mut joined = String::from(&self.lines[start.line].text[..start.column]);
        joined.push_str(new_text);
        joined.push_str(&self.lines[end.line].text[end.column..]);

        // Breaks inside `new_text` take the first touched line's ending; the
        // last resulting line keeps the last touched line's ending.
        let mut replacement = split_lines(&joined);
        if replacement.is_empty() {
            replacement.push(Line {
                text: String::new(),
                eol: "",
            });
        }
        let last = replacement.len() - 1;
        for (i, line) in replacement.iter_mut().enumerate() {
            if i == last {
                line.eol = last_eol;
            } else if !first_eol.is_empty() {
                line.eol = first_eol;
            }
        }
        self.lines.splice(start.line..=end.line, replacement);
        Ok(())
    }
}

fn split_lines(text: &str) -> Vec<Line> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<Line> = text
        .split_inclusive('\n')
        .map(|piece| {
            let (body, eol) = if let Some(body) = piece.strip_suffix("\r\n") {
                (body, "\r\n")
            } else if let Some(body) = piece.strip_suffix('\n') {
                (body, "\n")
            } else {
                (piece, "")
            };
            Line {
                text: body.to_string(),
                eol,
            }
        })
        .collect();
    if text.ends_with('\n') {
        lines.push(Line {
            text: String::new(),
            eol: "",
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(sl: usize, sc: usize, el: usize, ec: usize) -> SourceRange {
        SourceRange::new(Position::new(sl, sc), Position::new(el, ec))
    }

    #[test]
    fn test_round_trips_untouched_text() {
        for text in ["a\nb\n", "a\r\nb", "", "single", "a\r\nb\nc", "x\n\r\n"] {
            assert_eq!(TextDocument::new(text).to_string(), text);
        }
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        let doc = TextDocument::new("");
        assert_eq!(doc.line_count(), 0);
        assert_eq!(doc.line_text(0), None);
    }

    #[test]
    fn test_replace_keeps_mixed_line_endings() {
        let mut doc = TextDocument::new("<p>\r\n<b class=\"x\">\nend");
        doc.replace(&range(1, 3, 1, 12), ":class=\"{ 'x': true }\"").unwrap();
        assert_eq!(
            doc.to_string(),
            "<p>\r\n<b :class=\"{ 'x': true }\">\nend"
        );
    }

    #[test]
    fn test_replace_across_lines_keeps_outer_endings() {
        let mut doc = TextDocument::new("a\r\n{\r\n}\nz");
        doc.replace(&range(1, 0, 2, 1), "x").unwrap();
        assert_eq!(doc.to_string(), "a\r\nx\nz");
    }

    #[test]
    fn test_trailing_newline_is_a_line() {
        let doc = TextDocument::new("a\nb\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_text(2), Some(""));
        assert_eq!(doc.line_text(3), None);
    }

    #[test]
    fn test_text_in_range_single_line() {
        let doc = TextDocument::new("<div class=\"a\">");
        assert_eq!(doc.text_in_range(&range(0, 5, 0, 14)).unwrap(), "class=\"a\"");
    }

    #[test]
    fn test_text_in_range_multi_line() {
        let doc = TextDocument::new("x :class=\"{\r\n  'a': true\r\n}\" y");
        assert_eq!(
            doc.text_in_range(&range(0, 2, 2, 2)).unwrap(),
            ":class=\"{\r\n  'a': true\r\n}\""
        );
    }

    #[test]
    fn test_text_in_range_rejects_bad_ranges() {
        let doc = TextDocument::new("abc");
        assert!(doc.text_in_range(&range(0, 2, 0, 1)).is_none());
        assert!(doc.text_in_range(&range(0, 0, 0, 4)).is_none());
        assert!(doc.text_in_range(&range(1, 0, 1, 0)).is_none());
    }

    #[test]
    fn test_replace_collapses_lines() {
        let mut doc = TextDocument::new("<div :class=\"{\n  'a': true\n}\">\n</div>");
        doc.replace(&range(0, 5, 2, 2), "class=\"a\"").unwrap();
        assert_eq!(doc.to_string(), "<div class=\"a\">\n</div>");
    }

    #[test]
    fn test_replace_with_multi_line_text() {
        let mut doc = TextDocument::new("ab\r\ncd");
        doc.replace(&range(0, 1, 0, 2), "x\ny").unwrap();
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.to_string(), "ax\r\ny\r\ncd");
    }

    #[test]
    fn test_replace_out_of_bounds() {
        let mut doc = TextDocument::new("abc");
        let err = doc.replace(&range(0, 0, 3, 0), "x").unwrap_err();
        assert_eq!(err, TransformError::RangeOutOfBounds("0:0-3:0".into()));
        assert_eq!(doc.to_string(), "abc");
    }

    #[test]
    fn test_non_char_boundary_rejected() {
        let doc = TextDocument::new("é");
        assert!(doc.text_in_range(&range(0, 1, 0, 2)).is_none());
    }

    #[test]
    fn test_edit_serializes_for_editors() {
        let edit = TextEdit {
            range: range(1, 2, 3, 4),
            new_text: "class=\"a\"".into(),
        };
        let json = serde_json::to_value(&edit).unwrap();
        assert_eq!(json["range"]["start"]["line"], 1);
        assert_eq!(json["range"]["end"]["column"], 4);
        assert_eq!(json["newText"], "class=\"a\"");
    }
}
