/// Error kinds.
///
/// The closed set of failures the pipeline can report, split into lexical,
/// syntax and runtime errors. Each kind carries the title shown at the start
/// of a diagnostic.
pub mod kind;
/// Diagnostic rendering.
///
/// Turns an [`Error`] into the text shown to users: a traceback for runtime
/// errors, the error title and message, and the offending source lines with
/// the span underlined by carets.
pub mod diagnostic;

use std::rc::Rc;

pub use kind::ErrorKind;

use crate::interpreter::{evaluator::context::Context, position::Span};

/// A failure produced while lexing, parsing or evaluating a program.
///
/// Errors are never modified after construction. Runtime errors carry the call
/// context they were raised in, which [`Error::render`] walks to produce a
/// traceback.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
    /// What went wrong.
    pub kind:    ErrorKind,
    /// Human readable details.
    pub message: String,
    /// The source range the error points at.
    pub span:    Span,
    /// The call context of a runtime error.
    pub context: Option<Rc<Context>>,
}

impl Error {
    /// Creates an error without a call context.
    ///
    /// Lexical and syntax errors are built this way.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self { kind,
               message: message.into(),
               span,
               context: None }
    }

    /// Creates a runtime error raised inside `context`.
    #[must_use]
    pub fn runtime(kind: ErrorKind,
                   message: impl Into<String>,
                   span: Span,
                   context: &Rc<Context>)
                   -> Self {
        Self { kind,
               message: message.into(),
               span,
               context: Some(Rc::clone(context)) }
    }
}
