use anyhow::{bail, Context, Result};
use class_transform::TextDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// A template file loaded into an editable document.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub document: TextDocument,
}

impl SourceFile {
    /// Load a source file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("No such file: {}", path.display());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            document: TextDocument::new(&raw),
        })
    }

    /// Write the current document back to where it was loaded from.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.document.to_string())
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}
