use thiserror::Error;

/// Reasons a transform invocation stops without editing the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("No editor is active")]
    NoActiveEditor,
    #[error(":class object not properly closed or malformed")]
    MalformedBinding,
    #[error("No recognizable Vue class format found.")]
    UnrecognizedFormat,
    #[error("edit range {0} is outside the document")]
    RangeOutOfBounds(String),
}

impl TransformError {
    /// Whether the message is an expected outcome shown to the user verbatim,
    /// as opposed to a fault in the edit itself.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, TransformError::RangeOutOfBounds(_))
    }
}
