//! Associated-item resolution for Rill.
//!
//! This module binds path segments written against a receiver type —
//! `point.norm()`, `Point::ORIGIN`, `T::Output` — to the declaration they
//! refer to. Key components:
//!
//! - [`TypeContext`] - The read-only probing environment: the type table
//!   built by the collection pass plus the memoized trait resolver
//! - [`probe`] - Candidate collection over impl blocks and trait bounds
//! - [`scan_trait_bounds`] - Trait discovery for a receiver type
//! - [`report_ambiguity`] - One diagnostic spanning all conflicting declarations
//!
//! # Resolution Process
//!
//! 1. **Type Collection** - [`TypeContext::build`] records the resolved type
//!    of every impl block and impl item
//! 2. **Probing** - [`probe`] gathers candidates for one name on one receiver
//! 3. **Classification** - [`resolve_path_segment`] maps the candidate count
//!    to an outcome: resolved, not found, or ambiguous
//!
//! Outcomes are ordinary values. Only internal phase-ordering violations
//! panic; nothing here retries, and nothing is cached between calls beyond
//! the trait definitions themselves.

pub mod ambiguity;
pub mod bounds;
pub mod context;
pub mod error;
pub mod probe;
pub mod traits;

pub use ambiguity::report_ambiguity;
pub use bounds::scan_trait_bounds;
pub use context::TypeContext;
pub use error::{TypeError, TypeErrorKind, TypeResult};
pub use probe::{probe, Candidate, ImplCandidate, TraitCandidate};
pub use traits::{AssocKind, TraitAssocItem, TraitDef};

use crate::diagnostics::Diagnostic;
use crate::hir::Type;
use crate::span::Span;

/// The outcome of resolving one path segment against a receiver.
#[derive(Debug)]
pub enum PathResolution<'hir> {
    /// Exactly one candidate matched.
    Resolved(Candidate<'hir>),
    /// Nothing matched; the caller decides how to report it.
    NotFound,
    /// More than one candidate matched; always a hard error.
    Ambiguous(Vec<Candidate<'hir>>),
}

impl<'hir> PathResolution<'hir> {
    /// The diagnostic for a failed resolution, if any.
    ///
    /// `locus` is the use site the segment was written at.
    pub fn diagnostic(&self, name: &str, receiver: &Type, locus: Span) -> Option<Diagnostic> {
        match self {
            PathResolution::Resolved(_) => None,
            PathResolution::NotFound => Some(
                TypeError::new(
                    TypeErrorKind::AssocItemNotFound {
                        name: name.to_string(),
                        receiver: receiver.clone(),
                    },
                    locus,
                )
                .to_diagnostic(),
            ),
            PathResolution::Ambiguous(candidates) => {
                Some(report_ambiguity(candidates, name, locus))
            }
        }
    }
}

/// Resolve a single path segment against a receiver type.
///
/// Thin classification over [`probe`]: zero candidates is
/// [`PathResolution::NotFound`], one resolves, several are ambiguous.
pub fn resolve_path_segment<'hir>(
    ctx: &TypeContext<'hir>,
    receiver: &Type,
    name: &str,
) -> PathResolution<'hir> {
    let mut candidates = probe(ctx, receiver, name);
    match candidates.len() {
        0 => PathResolution::NotFound,
        1 => PathResolution::Resolved(candidates.remove(0)),
        _ => PathResolution::Ambiguous(candidates),
    }
}
