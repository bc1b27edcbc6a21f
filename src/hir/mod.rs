//! High-level Intermediate Representation (HIR) for Rill.
//!
//! The HIR is a simplified, typed representation of the AST. Key differences
//! from the AST:
//!
//! 1. **Types are resolved** - All type annotations are resolved to concrete `Type` values
//! 2. **Names are resolved** - All identifiers are resolved to `DefId`
//! 3. **Spans are preserved** - For error reporting, not for formatting
//!
//! # HIR Structure
//!
//! - [`Crate`] - Root node containing all items in a compilation unit
//! - [`Item`] - Top-level items (structs, traits, impl blocks)
//!
//! The path-resolution machinery in [`crate::typeck`] runs over a fully
//! built, immutable `Crate`; nothing here is mutated once type checking
//! starts.

pub mod def;
pub mod item;
pub mod ty;

use std::collections::HashMap;

pub use def::{DefId, DefKind, FloatTy, IntTy, UintTy};
pub use item::{
    BodyId, FieldDef, FnSig, GenericParam, Generics, ImplBlock, ImplItem, ImplItemKind, Item,
    ItemKind, StructDef, StructKind, TraitItem, TraitItemKind, TraitRef,
};
pub use ty::{PrimitiveTy, TyVarId, Type, TypeKind};

/// A compilation unit (crate) in HIR form.
#[derive(Debug, Clone)]
pub struct Crate {
    /// All items in the crate, indexed by DefId.
    pub items: HashMap<DefId, Item>,
    /// Impl blocks in lowering order, so probing is deterministic.
    pub impls: Vec<DefId>,
}

impl Crate {
    /// Create an empty crate.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            impls: Vec::new(),
        }
    }

    /// Insert an item, recording impl blocks in lowering order.
    pub fn insert_item(&mut self, item: Item) {
        if matches!(item.kind, ItemKind::Impl(_)) {
            self.impls.push(item.def_id);
        }
        self.items.insert(item.def_id, item);
    }

    /// Get an item by its DefId.
    pub fn get_item(&self, id: DefId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Iterate all impl blocks in lowering order.
    pub fn impl_blocks(&self) -> impl Iterator<Item = &ImplBlock> {
        self.impls.iter().filter_map(|id| {
            match &self.items.get(id)?.kind {
                ItemKind::Impl(block) => Some(block),
                _ => None,
            }
        })
    }
}

impl Default for Crate {
    fn default() -> Self {
        Self::new()
    }
}
