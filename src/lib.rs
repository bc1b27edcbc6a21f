//! # Rill Compiler Library
//!
//! The type-checker core of the Rill programming language: resolution of
//! associated items against a receiver type.
//!
//! Given a receiver type and a member name written as a path segment
//! (`x.foo()`, `T::foo`), this crate finds every item the name could bind
//! to — from inherent impl blocks attached to the receiver's type, and from
//! traits the receiver implements, including defaulted trait items — and
//! either yields exactly one candidate or reports an ambiguity that cites
//! every conflicting declaration.
//!
//! ## Resolution Pipeline
//!
//! ```text
//! HIR -> Type Collection -> Path Probe -> [0 | 1 | many candidates]
//! ```
//!
//! Parsing, lowering, unification, coherence checking and code generation
//! live in other crates; this one consumes an already-built, immutable
//! [`hir::Crate`] and a type table produced by [`typeck::TypeContext::build`].
//!
//! ## Quick Start
//!
//! ### Probing an inherent method
//!
//! ```rust
//! use rillc::hir::{
//!     BodyId, Crate, DefId, FnSig, ImplBlock, ImplItem, ImplItemKind, Item, ItemKind,
//!     StructDef, StructKind, Type,
//! };
//! use rillc::span::Span;
//! use rillc::typeck::{probe, TypeContext};
//!
//! let mut krate = Crate::new();
//! let point = DefId::new(0);
//! krate.insert_item(Item {
//!     def_id: point,
//!     name: "Point".to_string(),
//!     kind: ItemKind::Struct(StructDef {
//!         generics: Default::default(),
//!         kind: StructKind::Unit,
//!     }),
//!     span: Span::dummy(),
//! });
//!
//! let block = DefId::new(1);
//! krate.insert_item(Item {
//!     def_id: block,
//!     name: "Point".to_string(),
//!     kind: ItemKind::Impl(ImplBlock {
//!         def_id: block,
//!         generics: Default::default(),
//!         trait_ref: None,
//!         self_ty: Type::adt(point, vec![]),
//!         items: vec![ImplItem {
//!             def_id: DefId::new(2),
//!             name: "norm".to_string(),
//!             kind: ImplItemKind::Fn(FnSig::method(vec![], Type::f64()), BodyId(0)),
//!             span: Span::dummy(),
//!         }],
//!         span: Span::dummy(),
//!     }),
//!     span: Span::dummy(),
//! });
//!
//! let ctx = TypeContext::build(&krate);
//! let candidates = probe(&ctx, &Type::adt(point, vec![]), "norm");
//! assert_eq!(candidates.len(), 1);
//! assert!(candidates[0].is_impl_candidate());
//! ```
//!
//! ### Receiver matching
//!
//! A receiver matches an impl block when the types agree structurally; one
//! reference layer is tolerated, so `&Point` still finds items declared on
//! `Point`:
//!
//! ```rust
//! use rillc::hir::Type;
//!
//! let by_ref = Type::reference(Type::i32(), false);
//! assert!(by_ref.can_eq(&Type::i32(), false));
//! assert!(!by_ref.can_eq(&Type::i32(), true));
//! ```

pub mod diagnostics;
pub mod hir;
pub mod span;
pub mod typeck;

pub use diagnostics::{Diagnostic, DiagnosticEmitter, DiagnosticKind, ErrorCode};
pub use span::Span;
