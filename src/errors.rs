//! Error type for labeled path lookups.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by labeled lookups on a path.
///
/// Positional access through the `Index` operator is a caller contract and
/// panics out of range instead of reporting through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum PathError {
    /// No step on the path carries the requested label. Raised by lookups
    /// under [`Pop::First`](crate::Pop::First) and
    /// [`Pop::Last`](crate::Pop::Last) only; [`Pop::All`](crate::Pop::All)
    /// yields an empty binding list instead.
    #[error("no step on the path carries the label '{0}'")]
    #[diagnostic(code(spoor::path::label_not_found))]
    LabelNotFound(String),
}
