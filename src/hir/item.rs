//! HIR items (top-level declarations).
//!
//! This module defines the HIR representation of the declarations the
//! resolver works over: structs, trait definitions, and impl blocks with
//! their associated items. Bodies are referenced by [`BodyId`] but not
//! stored here; for resolution purposes only their *presence* matters,
//! since a trait item with a body is a defaulted (optional) one.

use super::{DefId, DefKind, TyVarId, Type};
use crate::span::Span;

/// An opaque handle to a function or constant body.
///
/// Bodies live in a separate store owned by later phases; the resolver
/// only cares whether an item has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// A top-level item in HIR.
#[derive(Debug, Clone)]
pub struct Item {
    /// The definition ID.
    pub def_id: DefId,
    /// The name of this item.
    pub name: String,
    /// The kind of item.
    pub kind: ItemKind,
    /// The source span.
    pub span: Span,
}

/// The kind of an item.
#[derive(Debug, Clone)]
pub enum ItemKind {
    /// A struct.
    Struct(StructDef),
    /// A trait definition.
    Trait {
        generics: Generics,
        items: Vec<TraitItem>,
    },
    /// An impl block.
    Impl(ImplBlock),
}

/// A struct definition.
#[derive(Debug, Clone)]
pub struct StructDef {
    /// Generic parameters.
    pub generics: Generics,
    /// The kind of struct.
    pub kind: StructKind,
}

/// The kind of struct.
#[derive(Debug, Clone)]
pub enum StructKind {
    /// A struct with named fields.
    Record(Vec<FieldDef>),
    /// A unit struct.
    Unit,
}

/// A struct field definition.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: Type,
    /// Source span.
    pub span: Span,
}

/// Generic parameters.
#[derive(Debug, Clone, Default)]
pub struct Generics {
    /// Type parameters.
    pub params: Vec<GenericParam>,
}

impl Generics {
    /// Create empty generics.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if there are no generic parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// A generic type parameter.
#[derive(Debug, Clone)]
pub struct GenericParam {
    /// The DefId for this parameter.
    pub def_id: DefId,
    /// The parameter name.
    pub name: String,
    /// The type variable this parameter binds to.
    pub var: TyVarId,
    /// Source span.
    pub span: Span,
}

/// A reference to a trait, as written on an impl block.
#[derive(Debug, Clone)]
pub struct TraitRef {
    /// The trait being referenced.
    pub def_id: DefId,
    /// Type arguments.
    pub args: Vec<Type>,
}

/// A function signature.
#[derive(Debug, Clone)]
pub struct FnSig {
    /// Explicit parameter types, excluding the receiver.
    pub inputs: Vec<Type>,
    /// Return type.
    pub output: Type,
    /// Whether the function takes a receiver (`self`) parameter.
    pub has_self: bool,
}

impl FnSig {
    /// Create a simple signature without a receiver.
    pub fn new(inputs: Vec<Type>, output: Type) -> Self {
        Self {
            inputs,
            output,
            has_self: false,
        }
    }

    /// Create a method signature, taking a receiver.
    pub fn method(inputs: Vec<Type>, output: Type) -> Self {
        Self {
            inputs,
            output,
            has_self: true,
        }
    }

    /// The callable type of this signature, with the receiver parameter
    /// prepended when the signature takes one.
    pub fn ty(&self, self_ty: Option<&Type>) -> Type {
        let mut params = Vec::with_capacity(self.inputs.len() + 1);
        if self.has_self {
            if let Some(self_ty) = self_ty {
                params.push(self_ty.clone());
            }
        }
        params.extend(self.inputs.iter().cloned());
        Type::function(params, self.output.clone())
    }
}

/// A trait item declaration.
#[derive(Debug, Clone)]
pub struct TraitItem {
    /// The DefId of this item.
    pub def_id: DefId,
    /// The name.
    pub name: String,
    /// The kind of trait item.
    pub kind: TraitItemKind,
    /// Source span.
    pub span: Span,
}

impl TraitItem {
    /// Whether this item carries a default definition, making it optional
    /// for implementors.
    pub fn has_default(&self) -> bool {
        match &self.kind {
            TraitItemKind::Fn(_, body) => body.is_some(),
            TraitItemKind::Type(default) => default.is_some(),
            TraitItemKind::Const(_, body) => body.is_some(),
        }
    }

    /// Get the DefKind for this item.
    pub fn def_kind(&self) -> DefKind {
        match &self.kind {
            TraitItemKind::Fn(..) => DefKind::AssocFn,
            TraitItemKind::Type(_) => DefKind::AssocType,
            TraitItemKind::Const(..) => DefKind::AssocConst,
        }
    }
}

/// The kind of trait item.
#[derive(Debug, Clone)]
pub enum TraitItemKind {
    /// A method; the body is the default implementation, if any.
    Fn(FnSig, Option<BodyId>),
    /// An associated type with an optional default.
    Type(Option<Type>),
    /// An associated constant with an optional default value.
    Const(Type, Option<BodyId>),
}

/// An impl block.
///
/// `trait_ref` is absent for inherent impls. Items are kept in declaration
/// order; the block is immutable once lowered and is referenced, never
/// copied, during probing.
#[derive(Debug, Clone)]
pub struct ImplBlock {
    /// The DefId of the impl block itself.
    pub def_id: DefId,
    /// Generic parameters.
    pub generics: Generics,
    /// The trait being implemented, if any.
    pub trait_ref: Option<TraitRef>,
    /// The type being implemented for, as declared.
    pub self_ty: Type,
    /// The associated items.
    pub items: Vec<ImplItem>,
    /// Source span.
    pub span: Span,
}

impl ImplBlock {
    /// Whether this is an inherent impl (no trait).
    pub fn is_inherent(&self) -> bool {
        self.trait_ref.is_none()
    }
}

/// An impl item.
#[derive(Debug, Clone)]
pub struct ImplItem {
    /// The DefId of this item.
    pub def_id: DefId,
    /// The name.
    pub name: String,
    /// The kind of impl item.
    pub kind: ImplItemKind,
    /// Source span.
    pub span: Span,
}

impl ImplItem {
    /// Get the DefKind for this item.
    pub fn def_kind(&self) -> DefKind {
        match &self.kind {
            ImplItemKind::Fn(..) => DefKind::AssocFn,
            ImplItemKind::Type(_) => DefKind::AssocType,
            ImplItemKind::Const(..) => DefKind::AssocConst,
        }
    }
}

/// The kind of impl item.
#[derive(Debug, Clone)]
pub enum ImplItemKind {
    /// A method.
    Fn(FnSig, BodyId),
    /// An associated type.
    Type(Type),
    /// An associated constant.
    Const(Type, BodyId),
}
