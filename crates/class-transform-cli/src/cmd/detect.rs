use anyhow::Result;
use class_transform::{detect_mode, Document, TransformError};
use class_transform_context::source::SourceFile;
use std::path::Path;

pub fn run(file: &Path, line: usize) -> Result<()> {
    let cursor = super::cursor_line(line)?;
    let source = SourceFile::load(file)?;
    if cursor >= source.document.line_count() {
        return Err(TransformError::NoActiveEditor.into());
    }

    println!("{}", detect_mode(&source.document, cursor));
    Ok(())
}
