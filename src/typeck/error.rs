//! Type checking errors.
//!
//! Recoverable failures are ordinary values: a probe that finds nothing
//! returns an empty candidate list, and resolution helpers return
//! [`TypeResult`]. Internal-consistency failures — a type that the
//! collection pass should have cached but did not, or a type query against
//! an item that cannot have one — are phase-ordering bugs in the compiler
//! itself and panic with a `BUG:` message instead.

use thiserror::Error;

use crate::diagnostics::{Diagnostic, ErrorCode};
use crate::hir::Type;
use crate::span::Span;

/// Result type alias for type checking operations.
///
/// `TypeError` is boxed to keep the Ok path small.
pub type TypeResult<T> = Result<T, Box<TypeError>>;

/// A type error.
#[derive(Debug, Clone)]
pub struct TypeError {
    /// The kind of error.
    pub kind: TypeErrorKind,
    /// The source span.
    pub span: Span,
    /// Optional help message.
    pub help: Option<String>,
}

impl TypeError {
    /// Create a new type error.
    pub fn new(kind: TypeErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            help: None,
        }
    }

    /// Wrap this error in a `Box` and return as `Err`.
    pub fn into_err<T>(self) -> TypeResult<T> {
        Err(Box::new(self))
    }

    /// Add a help message.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Convert to a diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = match &self.kind {
            TypeErrorKind::TraitNotFound { .. } => ErrorCode::TraitNotFound,
            TypeErrorKind::AssocItemNotFound { .. } => ErrorCode::AssocItemNotFound,
        };

        let mut diag = Diagnostic::error(self.kind.to_string(), self.span).with_error_code(code);
        if let Some(help) = &self.help {
            diag = diag.with_suggestion(help.clone());
        }
        diag
    }
}

/// The kind of a type error.
#[derive(Debug, Clone, Error)]
pub enum TypeErrorKind {
    #[error("cannot find trait `{name}` in this scope")]
    TraitNotFound { name: String },

    #[error("no associated item named `{name}` found for type `{receiver}`")]
    AssocItemNotFound { name: String, receiver: Type },
}
