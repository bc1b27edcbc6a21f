//! Trait bound discovery for a receiver type.
//!
//! Given a receiver, find every trait it participates in by scanning the
//! crate's trait-impl blocks. The resulting list feeds the trait half of
//! path probing: a trait found here may contribute its defaulted items as
//! candidates even when no impl block overrides them.

use std::collections::HashSet;
use std::sync::Arc;

use crate::hir::Type;

use super::context::TypeContext;
use super::traits::TraitDef;

/// Collect the traits implemented for `receiver`, in discovery order.
///
/// Every impl block is visited once. Inherent impls are skipped; a
/// trait-impl survives when its recorded self type `can_eq`s the receiver
/// under the same non-strict comparison the impl scan uses. Surviving trait
/// paths are resolved through the memoized resolver; paths that fail to
/// resolve are dropped (the front end has already reported them).
///
/// The result is deduplicated by trait: a receiver matched by two impl
/// blocks of one trait yields that trait once, at its first discovery
/// position, so callers never see the same trait twice.
pub fn scan_trait_bounds<'hir>(ctx: &TypeContext<'hir>, receiver: &Type) -> Vec<Arc<TraitDef>> {
    let mut matching_refs = Vec::new();
    for block in ctx.impl_blocks() {
        let Some(trait_ref) = &block.trait_ref else {
            continue;
        };
        // A block with no recorded self type is skipped here; only the
        // impl-item scan treats that as fatal.
        let Some(self_ty) = ctx.lookup_type(block.def_id) else {
            continue;
        };
        if !receiver.can_eq(self_ty, false) {
            continue;
        }
        matching_refs.push(trait_ref);
    }

    let mut seen = HashSet::new();
    let mut traits = Vec::new();
    for trait_ref in matching_refs {
        let Ok(trait_def) = ctx.resolve_trait(trait_ref.def_id) else {
            continue;
        };
        if seen.insert(trait_def.def_id) {
            traits.push(trait_def);
        }
    }
    traits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::{
        Crate, DefId, Generics, ImplBlock, Item, ItemKind, StructDef, StructKind, TraitRef,
    };
    use crate::span::Span;

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

        fn add_trait(&mut self, name: &str) -> DefId {
            let id = self.def();
            self.krate.insert_item(Item {
                def_id: id,
                name: name.to_string(),
                kind: ItemKind::Trait {
                    generics: Generics::empty(),
                    items: vec![],
                },
                span: Span::dummy(),
            });
            id
        }

        fn add_impl(&mut self, trait_id: Option<DefId>, self_ty: Type) -> DefId {
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
                    items: vec![],
                    span: Span::dummy(),
                }),
                span: Span::dummy(),
            });
            id
        }
    }

    #[test]
    fn test_discovery_order_and_inherent_blocks_skipped() {
        let mut fx = Fixture::new();
        let cat = fx.add_struct("Cat");
        let greet = fx.add_trait("Greet");
        let feed = fx.add_trait("Feed");
        fx.add_impl(None, cat.clone());
        fx.add_impl(Some(greet), cat.clone());
        fx.add_impl(Some(feed), cat.clone());

        let ctx = TypeContext::build(&fx.krate);
        let traits = scan_trait_bounds(&ctx, &cat);
        let names: Vec<_> = traits.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Greet", "Feed"]);
    }

    #[test]
    fn test_non_matching_receiver_finds_nothing() {
        let mut fx = Fixture::new();
        let cat = fx.add_struct("Cat");
        let dog = fx.add_struct("Dog");
        let greet = fx.add_trait("Greet");
        fx.add_impl(Some(greet), cat);

        let ctx = TypeContext::build(&fx.krate);
        assert!(scan_trait_bounds(&ctx, &dog).is_empty());
    }

    #[test]
    fn test_duplicate_impls_of_one_trait_dedup() {
        let mut fx = Fixture::new();
        let cat = fx.add_struct("Cat");
        let greet = fx.add_trait("Greet");
        fx.add_impl(Some(greet), cat.clone());
        fx.add_impl(Some(greet), Type::reference(cat.clone(), false));

        let ctx = TypeContext::build(&fx.krate);
        // both blocks match `Cat` under the non-strict comparison, but the
        // trait is reported once
        let traits = scan_trait_bounds(&ctx, &cat);
        assert_eq!(traits.len(), 1);
        assert_eq!(traits[0].name, "Greet");
    }

    #[test]
    fn test_reference_receiver_matches_value_impl() {
        let mut fx = Fixture::new();
        let cat = fx.add_struct("Cat");
        let greet = fx.add_trait("Greet");
        fx.add_impl(Some(greet), cat.clone());

        let ctx = TypeContext::build(&fx.krate);
        let traits = scan_trait_bounds(&ctx, &Type::reference(cat, false));
        assert_eq!(traits.len(), 1);
    }
}
