//! Type checking context.
//!
//! [`TypeContext`] is the read-only environment the path prober runs in. It
//! owns two stores, both keyed by [`DefId`]:
//!
//! - the **type table**, filled by [`TypeContext::build`] from the HIR before
//!   any probing happens: the resolved self type of every impl block and the
//!   resolved type of every impl item. Probing treats the table as
//!   immutable; a missing entry during the impl scan is a phase-ordering
//!   bug, not a user error.
//! - the **trait cache**: each trait definition is lowered to a
//!   [`TraitDef`] at most once, and repeated resolution hands back the same
//!   shared reference.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::hir::{self, DefId, ImplBlock, ImplItem, ImplItemKind, ItemKind, Type};
use crate::span::Span;

use super::error::{TypeError, TypeErrorKind, TypeResult};
use super::traits::TraitDef;

/// The read-only context for associated-item resolution.
pub struct TypeContext<'hir> {
    /// The crate being checked.
    krate: &'hir hir::Crate,
    /// Resolved types for impl blocks and their items.
    types: HashMap<DefId, Type>,
    /// Memoized trait definitions.
    trait_defs: RefCell<HashMap<DefId, Arc<TraitDef>>>,
}

impl<'hir> TypeContext<'hir> {
    /// Build the context for a crate.
    ///
    /// This is the type-collection pass: it records the self type of every
    /// impl block under the block's own `DefId`, and the type of every impl
    /// item under the item's `DefId`. Everything the prober later looks up
    /// is inserted here.
    pub fn build(krate: &'hir hir::Crate) -> Self {
        let mut types = HashMap::new();
        for block in krate.impl_blocks() {
            types.insert(block.def_id, block.self_ty.clone());
            for item in &block.items {
                types.insert(item.def_id, impl_item_type(block, item));
            }
        }
        Self {
            krate,
            types,
            trait_defs: RefCell::new(HashMap::new()),
        }
    }

    /// The crate this context was built for.
    pub fn krate(&self) -> &'hir hir::Crate {
        self.krate
    }

    /// Look up the resolved type recorded for a definition.
    pub fn lookup_type(&self, id: DefId) -> Option<&Type> {
        self.types.get(&id)
    }

    /// Look up a type that the collection pass is required to have recorded.
    ///
    /// # Panics
    ///
    /// Panics if the type is missing; probing may only run after the
    /// collection pass and a miss means the phases ran out of order.
    pub(crate) fn node_type(&self, id: DefId) -> Type {
        match self.types.get(&id) {
            Some(ty) => ty.clone(),
            None => panic!(
                "BUG: no type recorded for {id}; type collection must run before path probing"
            ),
        }
    }

    /// Iterate all impl blocks in the crate, in lowering order.
    pub fn impl_blocks(&self) -> impl Iterator<Item = &'hir ImplBlock> + '_ {
        self.krate.impl_blocks()
    }

    /// Resolve a trait `DefId` to its lowered definition.
    ///
    /// Lowering happens at most once per trait; the same `Arc` is returned
    /// on every subsequent call.
    pub fn resolve_trait(&self, trait_id: DefId) -> TypeResult<Arc<TraitDef>> {
        if let Some(def) = self.trait_defs.borrow().get(&trait_id) {
            return Ok(Arc::clone(def));
        }

        let Some(item) = self.krate.get_item(trait_id) else {
            return TypeError::new(
                TypeErrorKind::TraitNotFound {
                    name: trait_id.to_string(),
                },
                Span::dummy(),
            )
            .into_err();
        };
        let ItemKind::Trait { generics, items } = &item.kind else {
            return TypeError::new(
                TypeErrorKind::TraitNotFound {
                    name: item.name.clone(),
                },
                item.span,
            )
            .into_err();
        };

        let def = Arc::new(TraitDef::lower(item.def_id, &item.name, item.span, generics, items));
        self.trait_defs
            .borrow_mut()
            .insert(trait_id, Arc::clone(&def));
        Ok(def)
    }
}

/// The resolved type of an impl item.
///
/// Methods get a callable type with the receiver parameter taken from the
/// owning block's self type; constants and associated types contribute
/// their declared type directly.
fn impl_item_type(block: &ImplBlock, item: &ImplItem) -> Type {
    match &item.kind {
        ImplItemKind::Fn(sig, _) => sig.ty(Some(&block.self_ty)),
        ImplItemKind::Type(ty) => ty.clone(),
        ImplItemKind::Const(ty, _) => ty.clone(),
    }
}
