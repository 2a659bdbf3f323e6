//! Flip Vue class bindings between object form and string/template form.
//!
//! ```text
//! class="foo bar"                  <->  :class="{ 'foo': true, 'bar': true }"
//! :class="`btn ${size}`"           <->  :class="{ 'btn': true, [`${size}`]: true }"
//! ```
//!
//! The host editor is reached only through [`Document`]; [`transform`]
//! returns a [`TextEdit`] and never touches anything else.

mod dispatch;
mod document;
mod error;
mod locate;
mod object;
mod split;
mod string;
mod token;

pub use dispatch::{apply_transform, detect_mode, line_form, transform, Mode};
pub use document::{Document, Position, SourceRange, TextDocument, TextEdit};
pub use error::TransformError;
pub use locate::locate_object_binding;
pub use object::{object_to_string, parse_object_entries, render_string_form};
pub use split::split_class_value;
pub use string::{parse_class_value, render_object_form, string_to_object};
pub use token::{string_form_for, ClassBinding, ClassToken, SurfaceForm, TokenKind};
