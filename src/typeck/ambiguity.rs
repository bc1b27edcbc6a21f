//! Ambiguity reporting for path resolution.
//!
//! When a probe yields more than one candidate the name cannot be bound;
//! Rill treats that as a hard error and never ranks candidates. This module
//! turns the candidate list into a single diagnostic that points at the use
//! site and at every conflicting declaration.

use crate::diagnostics::{Diagnostic, ErrorCode};
use crate::span::Span;

use super::probe::Candidate;

/// Build the diagnostic for an ambiguous path segment.
///
/// `locus` is the use site being resolved. One secondary label is attached
/// per candidate, in candidate order, pointing at that candidate's
/// declaration. Requires at least two candidates; a single candidate is a
/// successful resolution and reporting it is a caller bug.
pub fn report_ambiguity(candidates: &[Candidate<'_>], name: &str, locus: Span) -> Diagnostic {
    assert!(
        candidates.len() > 1,
        "BUG: ambiguity report requires at least two candidates"
    );

    let mut diag = Diagnostic::error(
        format!("multiple applicable items in scope for `{name}`"),
        locus,
    )
    .with_error_code(ErrorCode::AmbiguousPathItem);

    for candidate in candidates {
        diag = diag.with_note(
            candidate.span(),
            format!("{} `{name}` defined here", candidate.def_kind().descr()),
        );
    }

    diag
}
