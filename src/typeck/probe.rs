//! Path probing: resolving a path segment against a receiver type.
//!
//! Given a receiver type and a single member name (`point.norm()`,
//! `Point::ORIGIN`), [`probe`] collects every associated item the name
//! could bind to:
//!
//! 1. items of impl blocks whose self type matches the receiver, and
//! 2. defaulted items of traits the receiver implements, unless an impl
//!    of that trait already overrides the name.
//!
//! The probe never picks a winner. Zero candidates means "not found" and is
//! classified by the caller; more than one is an ambiguity handled by
//! [`super::ambiguity::report_ambiguity`]. Required trait items never
//! surface on their own: with no default and no providing impl there is
//! nothing to bind to, and the missing implementation is reported by the
//! trait-conformance check, not here.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::hir::{DefId, DefKind, ImplBlock, ImplItem, ImplItemKind, Type};
use crate::span::Span;

use super::bounds::scan_trait_bounds;
use super::context::TypeContext;
use super::traits::{AssocKind, TraitAssocItem, TraitDef};

/// One possible resolution of a path segment.
///
/// The variant encodes both where the candidate came from and what kind of
/// item it is; impl-sourced variants can only carry an [`ImplCandidate`]
/// and trait-sourced ones a [`TraitCandidate`], so a mismatch between the
/// two is unrepresentable.
#[derive(Debug, Clone)]
pub enum Candidate<'hir> {
    /// An associated constant from a matching impl block.
    ImplConst(ImplCandidate<'hir>),
    /// An associated type from a matching impl block.
    ImplTypeAlias(ImplCandidate<'hir>),
    /// An associated function from a matching impl block.
    ImplFn(ImplCandidate<'hir>),
    /// A defaulted associated constant supplied by a trait bound.
    TraitConst(TraitCandidate),
    /// A defaulted associated type supplied by a trait bound.
    TraitTypeAlias(TraitCandidate),
    /// A defaulted method supplied by a trait bound.
    TraitFn(TraitCandidate),
}

/// Payload for candidates found in impl blocks.
#[derive(Debug, Clone)]
pub struct ImplCandidate<'hir> {
    /// The item's resolved type, from the type table.
    pub ty: Type,
    /// The matching item.
    pub item: &'hir ImplItem,
    /// The impl block that owns it.
    pub parent: &'hir ImplBlock,
}

/// Payload for candidates supplied by a trait's default.
#[derive(Debug, Clone)]
pub struct TraitCandidate {
    /// The item's own declared type; no substitution is applied until a
    /// single candidate has been chosen.
    pub ty: Type,
    /// The trait supplying the default.
    pub trait_def: Arc<TraitDef>,
    /// The defaulted item itself.
    pub item: TraitAssocItem,
}

impl<'hir> Candidate<'hir> {
    /// The candidate's resolved type.
    pub fn ty(&self) -> &Type {
        match self {
            Candidate::ImplConst(c) | Candidate::ImplTypeAlias(c) | Candidate::ImplFn(c) => &c.ty,
            Candidate::TraitConst(c) | Candidate::TraitTypeAlias(c) | Candidate::TraitFn(c) => {
                &c.ty
            }
        }
    }

    /// The declaration site to point at when reporting this candidate.
    pub fn span(&self) -> Span {
        match self {
            Candidate::ImplConst(c) | Candidate::ImplTypeAlias(c) | Candidate::ImplFn(c) => {
                c.item.span
            }
            Candidate::TraitConst(c) | Candidate::TraitTypeAlias(c) | Candidate::TraitFn(c) => {
                c.item.span
            }
        }
    }

    /// The DefId of the declaration this candidate binds to.
    pub fn def_id(&self) -> DefId {
        match self {
            Candidate::ImplConst(c) | Candidate::ImplTypeAlias(c) | Candidate::ImplFn(c) => {
                c.item.def_id
            }
            Candidate::TraitConst(c) | Candidate::TraitTypeAlias(c) | Candidate::TraitFn(c) => {
                c.item.def_id
            }
        }
    }

    /// The definition kind of the underlying item, for diagnostics.
    pub fn def_kind(&self) -> DefKind {
        match self {
            Candidate::ImplConst(c) | Candidate::ImplTypeAlias(c) | Candidate::ImplFn(c) => {
                c.item.def_kind()
            }
            Candidate::TraitConst(c) | Candidate::TraitTypeAlias(c) | Candidate::TraitFn(c) => {
                c.item.kind().def_kind()
            }
        }
    }

    /// Whether this candidate comes from an impl block.
    pub fn is_impl_candidate(&self) -> bool {
        matches!(
            self,
            Candidate::ImplConst(_) | Candidate::ImplTypeAlias(_) | Candidate::ImplFn(_)
        )
    }

    /// Whether this candidate is a trait-supplied default.
    pub fn is_trait_candidate(&self) -> bool {
        !self.is_impl_candidate()
    }
}

impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::ImplConst(c) | Candidate::ImplTypeAlias(c) | Candidate::ImplFn(c) => {
                write!(
                    f,
                    "{} `{}` in an impl for `{}`",
                    c.item.def_kind().descr(),
                    c.item.name,
                    c.parent.self_ty
                )
            }
            Candidate::TraitConst(c) | Candidate::TraitTypeAlias(c) | Candidate::TraitFn(c) => {
                write!(
                    f,
                    "{} `{}` defaulted by trait `{}`",
                    c.item.kind().def_kind().descr(),
                    c.item.name,
                    c.trait_def.name
                )
            }
        }
    }
}

/// Collect every candidate binding for `name` on `receiver`.
///
/// The receiver must be fully resolved. Impl candidates come first, then
/// trait candidates in bound-discovery order, so diagnostics are
/// deterministic. The probe performs one self-type comparison per impl
/// block; multi-step auto-deref is the caller's loop, re-probing once per
/// deref step.
pub fn probe<'hir>(
    ctx: &TypeContext<'hir>,
    receiver: &Type,
    name: &str,
) -> Vec<Candidate<'hir>> {
    debug_assert!(
        !receiver.has_infer_vars(),
        "BUG: probing with an unresolved receiver type"
    );

    let mut candidates = Vec::new();
    collect_impl_candidates(ctx, receiver, name, &mut candidates);
    collect_trait_candidates(ctx, receiver, name, &mut candidates);
    candidates
}

/// Scan impl blocks for items named `name` on a matching self type.
fn collect_impl_candidates<'hir>(
    ctx: &TypeContext<'hir>,
    receiver: &Type,
    name: &str,
    candidates: &mut Vec<Candidate<'hir>>,
) {
    for block in ctx.impl_blocks() {
        let self_ty = ctx.node_type(block.def_id);
        if !receiver.can_eq(&self_ty, false) {
            continue;
        }
        for item in &block.items {
            if item.name != name {
                continue;
            }
            let ty = ctx.node_type(item.def_id);
            let candidate = ImplCandidate {
                ty,
                item,
                parent: block,
            };
            candidates.push(match &item.kind {
                ImplItemKind::Fn(..) => Candidate::ImplFn(candidate),
                ImplItemKind::Type(_) => Candidate::ImplTypeAlias(candidate),
                ImplItemKind::Const(..) => Candidate::ImplConst(candidate),
            });
        }
    }
}

/// Scan the receiver's trait bounds for a defaulted item named `name`.
fn collect_trait_candidates<'hir>(
    ctx: &TypeContext<'hir>,
    receiver: &Type,
    name: &str,
    candidates: &mut Vec<Candidate<'hir>>,
) {
    // Traits whose impl already contributed a same-named item: their default
    // is overridden and must not surface a second time.
    let overridden: HashSet<DefId> = candidates
        .iter()
        .filter_map(|candidate| match candidate {
            Candidate::ImplConst(c) | Candidate::ImplTypeAlias(c) | Candidate::ImplFn(c) => {
                c.parent.trait_ref.as_ref().map(|tr| tr.def_id)
            }
            _ => None,
        })
        .collect();

    for trait_def in scan_trait_bounds(ctx, receiver) {
        let item = match trait_def.assoc_item(name) {
            Some(item) => item.clone(),
            None => continue,
        };
        // Required items never surface as trait-only candidates; a missing
        // implementation is the conformance check's diagnostic.
        if !item.has_default {
            continue;
        }
        if overridden.contains(&trait_def.def_id) {
            continue;
        }

        let kind = item.kind();
        let candidate = TraitCandidate {
            ty: item.ty(),
            trait_def,
            item,
        };
        candidates.push(match kind {
            AssocKind::Fn => Candidate::TraitFn(candidate),
            AssocKind::Type => Candidate::TraitTypeAlias(candidate),
            AssocKind::Const => Candidate::TraitConst(candidate),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::{
        BodyId, Crate, FnSig, Generics, Item, ItemKind, StructDef, StructKind, TraitItem,
        TraitItemKind, TraitRef,
    };

    struct Fixture {
        krate: Crate,
        next: u32,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                krate: Crate::new(),
                next: 0,
            }
        }

        fn def(&mut self) -> DefId {
            let id = DefId::new(self.next);
            self.next += 1;
            id
        }

        fn span(&self) -> Span {
            Span::new(self.next as usize, self.next as usize + 1, 1, self.next + 1)
        }

        fn add_struct(&mut self, name: &str) -> Type {
            let id = self.def();
            self.krate.insert_item(Item {
                def_id: id,
                name: name.to_string(),
                kind: ItemKind::Struct(StructDef {
                    generics: Generics::empty(),
                    kind: StructKind::Unit,
                }),
                span: Span::dummy(),
            });
            Type::adt(id, vec![])
        }

        fn add_trait(&mut self, name: &str, items: Vec<TraitItem>) -> DefId {
            let id = self.def();
            self.krate.insert_item(Item {
                def_id: id,
                name: name.to_string(),
                kind: ItemKind::Trait {
                    generics: Generics::empty(),
                    items,
                },
                span: Span::dummy(),
            });
            id
        }

        fn trait_fn(&mut self, name: &str, default: bool) -> TraitItem {
            let span = self.span();
            TraitItem {
                def_id: self.def(),
                name: name.to_string(),
                kind: TraitItemKind::Fn(
                    FnSig::method(vec![], Type::unit()),
                    default.then_some(BodyId(0)),
                ),
                span,
            }
        }

        fn impl_fn(&mut self, name: &str) -> ImplItem {
            let span = self.span();
            ImplItem {
                def_id: self.def(),
                name: name.to_string(),
                kind: ImplItemKind::Fn(FnSig::method(vec![], Type::unit()), BodyId(0)),
                span,
            }
        }

        fn add_impl(
            &mut self,
            trait_id: Option<DefId>,
            self_ty: Type,
            items: Vec<ImplItem>,
        ) -> DefId {
            let id = self.def();
            self.krate.insert_item(Item {
                def_id: id,
                name: self_ty.to_string(),
                kind: ItemKind::Impl(ImplBlock {
                    def_id: id,
                    generics: Generics::empty(),
                    trait_ref: trait_id.map(|def_id| TraitRef {
                        def_id,
                        args: vec![],
                    }),
                    self_ty,
                    items,
                    span: Span::dummy(),
                }),
                span: Span::dummy(),
            });
            id
        }
    }

    #[test]
    fn test_inherent_item_is_found() {
        let mut fx = Fixture::new();
        let point = fx.add_struct("Point");
        let norm = fx.impl_fn("norm");
        fx.add_impl(None, point.clone(), vec![norm]);

        let ctx = TypeContext::build(&fx.krate);
        let candidates = probe(&ctx, &point, "norm");
        assert_eq!(candidates.len(), 1);
        assert!(matches!(candidates[0], Candidate::ImplFn(_)));
        assert_eq!(
            candidates[0].ty(),
            &Type::function(vec![point], Type::unit())
        );
    }

    #[test]
    fn test_unknown_name_finds_nothing() {
        let mut fx = Fixture::new();
        let point = fx.add_struct("Point");
        let norm = fx.impl_fn("norm");
        fx.add_impl(None, point.clone(), vec![norm]);

        let ctx = TypeContext::build(&fx.krate);
        assert!(probe(&ctx, &point, "nrom").is_empty());
    }

    #[test]
    fn test_defaulted_trait_item_surfaces_without_override() {
        let mut fx = Fixture::new();
        let cat = fx.add_struct("Cat");
        let hello = fx.trait_fn("hello", true);
        let greet = fx.add_trait("Greet", vec![hello]);
        fx.add_impl(Some(greet), cat.clone(), vec![]);

        let ctx = TypeContext::build(&fx.krate);
        let candidates = probe(&ctx, &cat, "hello");
        assert_eq!(candidates.len(), 1);
        assert!(matches!(candidates[0], Candidate::TraitFn(_)));
    }

    #[test]
    fn test_required_trait_item_never_surfaces_alone() {
        let mut fx = Fixture::new();
        let cat = fx.add_struct("Cat");
        let hello = fx.trait_fn("hello", false);
        let greet = fx.add_trait("Greet", vec![hello]);
        fx.add_impl(Some(greet), cat.clone(), vec![]);

        let ctx = TypeContext::build(&fx.krate);
        assert!(probe(&ctx, &cat, "hello").is_empty());
    }

    #[test]
    fn test_override_suppresses_the_default() {
        let mut fx = Fixture::new();
        let dog = fx.add_struct("Dog");
        let hello = fx.trait_fn("hello", true);
        let greet = fx.add_trait("Greet", vec![hello]);
        let override_fn = fx.impl_fn("hello");
        fx.add_impl(Some(greet), dog.clone(), vec![override_fn]);

        let ctx = TypeContext::build(&fx.krate);
        let candidates = probe(&ctx, &dog, "hello");
        assert_eq!(candidates.len(), 1);
        assert!(matches!(candidates[0], Candidate::ImplFn(_)));
    }

    #[test]
    fn test_impl_candidates_precede_trait_candidates() {
        let mut fx = Fixture::new();
        let cat = fx.add_struct("Cat");
        let hello = fx.trait_fn("hello", true);
        let greet = fx.add_trait("Greet", vec![hello]);
        fx.add_impl(Some(greet), cat.clone(), vec![]);
        // an unrelated inherent `hello` on the same type
        let inherent = fx.impl_fn("hello");
        fx.add_impl(None, cat.clone(), vec![inherent]);

        let ctx = TypeContext::build(&fx.krate);
        let candidates = probe(&ctx, &cat, "hello");
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].is_impl_candidate());
        assert!(candidates[1].is_trait_candidate());
    }

    #[test]
    fn test_const_and_type_alias_kinds() {
        let mut fx = Fixture::new();
        let grid = fx.add_struct("Grid");
        let width_span = fx.span();
        let width = ImplItem {
            def_id: fx.def(),
            name: "WIDTH".to_string(),
            kind: ImplItemKind::Const(Type::u32(), BodyId(0)),
            span: width_span,
        };
        let cell_span = fx.span();
        let cell = ImplItem {
            def_id: fx.def(),
            name: "Cell".to_string(),
            kind: ImplItemKind::Type(Type::bool()),
            span: cell_span,
        };
        fx.add_impl(None, grid.clone(), vec![width, cell]);

        let ctx = TypeContext::build(&fx.krate);
        let candidates = probe(&ctx, &grid, "WIDTH");
        assert!(matches!(candidates.as_slice(), [Candidate::ImplConst(_)]));
        assert_eq!(candidates[0].ty(), &Type::u32());

        let candidates = probe(&ctx, &grid, "Cell");
        assert!(matches!(candidates.as_slice(), [Candidate::ImplTypeAlias(_)]));
        assert_eq!(candidates[0].def_kind(), DefKind::AssocType);
    }

    #[test]
    fn test_display_names_the_source() {
        let mut fx = Fixture::new();
        let cat = fx.add_struct("Cat");
        let hello = fx.trait_fn("hello", true);
        let greet = fx.add_trait("Greet", vec![hello]);
        fx.add_impl(Some(greet), cat.clone(), vec![]);

        let ctx = TypeContext::build(&fx.krate);
        let candidates = probe(&ctx, &cat, "hello");
        assert_eq!(
            candidates[0].to_string(),
            "associated function `hello` defaulted by trait `Greet`"
        );
    }
}
