/// Whether a class entry is a literal class name or an interpolated expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Static,
    Dynamic,
}

/// A single class entry of a binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken {
    pub kind: TokenKind,
    /// Static: the bare class name, e.g. `active`.
    /// Dynamic: the expression source without its `` [`...`] `` wrapper, e.g. `${isOpen}`.
    pub text: String,
}

impl ClassToken {
    /// Build a static token. Returns `None` for blank names.
    pub fn static_class(text: &str) -> Option<Self> {
        Self::new(TokenKind::Static, text)
    }

    /// Build a dynamic token. Returns `None` for blank expressions.
    pub fn dynamic(text: &str) -> Option<Self> {
        Self::new(TokenKind::Dynamic, text)
    }

    fn new(kind: TokenKind, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            text: text.to_string(),
        })
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == TokenKind::Dynamic
    }
}

/// Ordered class entries in source order. Duplicates are kept.
pub type ClassBinding = Vec<ClassToken>;

/// The textual encoding a binding is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceForm {
    /// `:class="{ 'a': true }"`
    ObjectForm,
    /// `class="a b"`
    StringForm,
    /// ``:class="`a ${b}`"``
    TemplateForm,
}

/// Pick the form a binding prints to when leaving object form.
pub fn string_form_for(tokens: &[ClassToken]) -> SurfaceForm {
    if tokens.iter().any(ClassToken::is_dynamic) {
        SurfaceForm::TemplateForm
    } else {
        SurfaceForm::StringForm
    }
}
