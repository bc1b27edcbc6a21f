//! Resolved trait definitions.
//!
//! [`TraitDef`] is the canonical, read-only view of one trait declaration
//! used by the path prober: the trait's items in declaration order, each
//! tagged with whether it carries a default. Instances are produced only by
//! [`TypeContext::resolve_trait`](super::TypeContext::resolve_trait), which
//! memoizes them, so two resolutions of the same trait share one
//! definition.
//!
//! Lookup misses are represented as `None`; there is no error-sentinel
//! item, and an item's kind is always one of the three real kinds.

use std::fmt;

use crate::hir::{DefId, DefKind, FnSig, Generics, TraitItem, TraitItemKind, TyVarId, Type};
use crate::span::Span;

/// The kind of an associated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssocKind {
    /// An associated function or method.
    Fn,
    /// An associated constant.
    Const,
    /// An associated type.
    Type,
}

impl AssocKind {
    /// The corresponding definition kind, for diagnostics.
    pub fn def_kind(&self) -> DefKind {
        match self {
            AssocKind::Fn => DefKind::AssocFn,
            AssocKind::Const => DefKind::AssocConst,
            AssocKind::Type => DefKind::AssocType,
        }
    }
}

/// A resolved trait definition.
#[derive(Debug, Clone)]
pub struct TraitDef {
    /// The trait's DefId.
    pub def_id: DefId,
    /// The trait name.
    pub name: String,
    /// Where the trait is declared.
    pub span: Span,
    /// The trait's generic parameters.
    pub generics: Generics,
    /// The trait's items, in declaration order.
    items: Vec<TraitAssocItem>,
}

impl TraitDef {
    /// Lower a trait declaration into its resolved form.
    ///
    /// Item names are duplicate-free by the time lowering runs; name
    /// resolution rejects traits that declare one name twice.
    pub(crate) fn lower(
        def_id: DefId,
        name: &str,
        span: Span,
        generics: &Generics,
        items: &[TraitItem],
    ) -> Self {
        let items = items
            .iter()
            .map(|item| TraitAssocItem::lower(item, generics))
            .collect();
        Self {
            def_id,
            name: name.to_string(),
            span,
            generics: generics.clone(),
            items,
        }
    }

    /// The trait's items, in declaration order.
    pub fn assoc_items(&self) -> &[TraitAssocItem] {
        &self.items
    }

    /// Look up an item by name.
    ///
    /// Traits hold a handful of items, so a linear scan is fine.
    pub fn assoc_item(&self, name: &str) -> Option<&TraitAssocItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Look up an item by name, restricted to one kind.
    pub fn assoc_item_of_kind(&self, name: &str, kind: AssocKind) -> Option<&TraitAssocItem> {
        self.items
            .iter()
            .filter(|item| item.kind() == kind)
            .find(|item| item.name == name)
    }
}

impl fmt::Display for TraitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trait {} {{ ", self.name)?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let prefix = match item.kind() {
                AssocKind::Fn => "fn",
                AssocKind::Const => "const",
                AssocKind::Type => "type",
            };
            write!(f, "{prefix} {}", item.name)?;
        }
        write!(f, " }}")
    }
}

/// One item declared by a trait.
#[derive(Debug, Clone)]
pub struct TraitAssocItem {
    /// The item's DefId.
    pub def_id: DefId,
    /// The item name.
    pub name: String,
    /// Where the item is declared.
    pub span: Span,
    /// Whether the item has a default definition. Defaulted items are
    /// optional for implementors and can satisfy a probe on their own;
    /// required ones only ever surface through a providing impl.
    pub has_default: bool,
    /// The generic parameters the item inherits from its trait.
    pub inherited_generics: Generics,
    /// Kind-specific declaration data.
    data: TraitItemData,
}

/// Kind-specific data for a trait item.
#[derive(Debug, Clone)]
enum TraitItemData {
    /// A method signature plus the placeholder type standing in for the
    /// implicit receiver.
    Fn { sig: FnSig, self_ty: Type },
    /// A constant and its declared type.
    Const { ty: Type },
    /// An associated type and its default, if any.
    Type { default: Option<Type> },
}

impl TraitAssocItem {
    /// The implicit `Self` parameter is type parameter 0 of the trait;
    /// declared generics start at 1.
    const SELF_PARAM: TyVarId = TyVarId::new(0);

    fn lower(item: &TraitItem, trait_generics: &Generics) -> Self {
        let (data, has_default) = match &item.kind {
            TraitItemKind::Fn(sig, body) => (
                TraitItemData::Fn {
                    sig: sig.clone(),
                    self_ty: Type::param(Self::SELF_PARAM),
                },
                body.is_some(),
            ),
            TraitItemKind::Const(ty, value) => (
                TraitItemData::Const { ty: ty.clone() },
                value.is_some(),
            ),
            TraitItemKind::Type(default) => (
                TraitItemData::Type {
                    default: default.clone(),
                },
                default.is_some(),
            ),
        };
        Self {
            def_id: item.def_id,
            name: item.name.clone(),
            span: item.span,
            has_default,
            inherited_generics: trait_generics.clone(),
            data,
        }
    }

    /// The kind of this item.
    pub fn kind(&self) -> AssocKind {
        match &self.data {
            TraitItemData::Fn { .. } => AssocKind::Fn,
            TraitItemData::Const { .. } => AssocKind::Const,
            TraitItemData::Type { .. } => AssocKind::Type,
        }
    }

    /// The declared type of this item, computed on demand.
    ///
    /// Constants contribute their declared type, associated types their
    /// default target, and methods a callable type including the implicit
    /// receiver placeholder. No substitution is applied; instantiating the
    /// trait's generics happens after a single candidate has been chosen.
    ///
    /// # Panics
    ///
    /// Panics for an associated type without a default: there is no type to
    /// hand out, and the prober never surfaces required items.
    pub fn ty(&self) -> Type {
        match &self.data {
            TraitItemData::Fn { sig, self_ty } => sig.ty(Some(self_ty)),
            TraitItemData::Const { ty } => ty.clone(),
            TraitItemData::Type { default: Some(ty) } => ty.clone(),
            TraitItemData::Type { default: None } => panic!(
                "BUG: requested the type of required associated type `{}`",
                self.name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::BodyId;

    fn greet_items() -> Vec<TraitItem> {
        vec![
            TraitItem {
                def_id: DefId::new(10),
                name: "hello".to_string(),
                kind: TraitItemKind::Fn(
                    FnSig::method(vec![], Type::unit()),
                    Some(BodyId(0)),
                ),
                span: Span::new(5, 10, 1, 6),
            },
            TraitItem {
                def_id: DefId::new(11),
                name: "LIMIT".to_string(),
                kind: TraitItemKind::Const(Type::u32(), None),
                span: Span::new(12, 17, 2, 1),
            },
            TraitItem {
                def_id: DefId::new(12),
                name: "Output".to_string(),
                kind: TraitItemKind::Type(None),
                span: Span::new(20, 26, 3, 1),
            },
        ]
    }

    fn greet() -> TraitDef {
        TraitDef::lower(
            DefId::new(1),
            "Greet",
            Span::dummy(),
            &Generics::empty(),
            &greet_items(),
        )
    }

    #[test]
    fn test_lookup_on_empty_trait() {
        let empty = TraitDef::lower(
            DefId::new(1),
            "Marker",
            Span::dummy(),
            &Generics::empty(),
            &[],
        );
        assert!(empty.assoc_item("anything").is_none());
    }

    #[test]
    fn test_lookup_by_name() {
        let trait_def = greet();
        assert!(trait_def.assoc_item("hello").is_some());
        assert!(trait_def.assoc_item("goodbye").is_none());
    }

    #[test]
    fn test_lookup_by_name_and_kind() {
        let trait_def = greet();
        assert!(trait_def
            .assoc_item_of_kind("hello", AssocKind::Fn)
            .is_some());
        assert!(trait_def
            .assoc_item_of_kind("hello", AssocKind::Const)
            .is_none());
        assert!(trait_def
            .assoc_item_of_kind("LIMIT", AssocKind::Const)
            .is_some());
    }

    #[test]
    fn test_optionality_follows_defaults() {
        let trait_def = greet();
        assert!(trait_def.assoc_item("hello").unwrap().has_default);
        assert!(!trait_def.assoc_item("LIMIT").unwrap().has_default);
        assert!(!trait_def.assoc_item("Output").unwrap().has_default);
    }

    #[test]
    fn test_method_type_includes_receiver_placeholder() {
        let trait_def = greet();
        let hello = trait_def.assoc_item("hello").unwrap();
        assert_eq!(
            hello.ty(),
            Type::function(
                vec![Type::param(TraitAssocItem::SELF_PARAM)],
                Type::unit()
            )
        );
    }

    #[test]
    fn test_const_type() {
        let trait_def = greet();
        assert_eq!(trait_def.assoc_item("LIMIT").unwrap().ty(), Type::u32());
    }

    #[test]
    #[should_panic(expected = "BUG: requested the type")]
    fn test_required_assoc_type_has_no_type() {
        let trait_def = greet();
        trait_def.assoc_item("Output").unwrap().ty();
    }

    #[test]
    fn test_display() {
        assert_eq!(
            greet().to_string(),
            "trait Greet { fn hello, const LIMIT, type Output }"
        );
    }
}
