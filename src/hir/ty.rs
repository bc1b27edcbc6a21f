//! Type representation for HIR.
//!
//! This module defines the semantic type system for Rill. Unlike the AST
//! `Type` which represents the syntactic form, these types are fully resolved
//! and normalized.
//!
//! # Type Structure
//!
//! Rill's type system includes:
//! - **Primitive types**: `i32`, `f64`, `bool`, `char`, `str`
//! - **Composite types**: tuples, arrays, slices
//! - **Nominal types**: structs (referenced by DefId)
//! - **Function types**: `fn(A, B) -> C`
//! - **Reference types**: `&T`, `&mut T`
//! - **Type variables**: for inference and generics
//!
//! The path prober only ever asks one question of a type: whether a receiver
//! can be considered equal to an impl block's self type. That question is
//! answered by [`Type::can_eq`]; full generic unification lives elsewhere.

use std::fmt;
use std::sync::Arc;

use super::def::{FloatTy, IntTy, UintTy};
use super::DefId;

/// The unique identifier for a type variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TyVarId(pub u32);

impl TyVarId {
    /// Create a new type variable ID.
    pub const fn new(id: u32) -> Self {
        TyVarId(id)
    }
}

/// A semantic type in Rill.
///
/// Types are compared structurally. The `Arc` wrapper allows efficient
/// cloning and sharing.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Type {
    pub kind: Arc<TypeKind>,
}

impl Type {
    /// Create a new type from a kind.
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind: Arc::new(kind),
        }
    }

    /// Get the kind of this type.
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Check if this type is a reference.
    pub fn is_ref(&self) -> bool {
        matches!(self.kind(), TypeKind::Ref { .. })
    }

    /// Check if this type is an error type.
    pub fn is_error(&self) -> bool {
        matches!(self.kind(), TypeKind::Error)
    }

    /// Check if this type contains any unresolved inference variables.
    ///
    /// Generic parameters (`Param`) do not count; a generic receiver is
    /// still a fully resolved one.
    pub fn has_infer_vars(&self) -> bool {
        match self.kind() {
            TypeKind::Infer(_) => true,
            TypeKind::Primitive(_) | TypeKind::Param(_) | TypeKind::Never | TypeKind::Error => {
                false
            }
            TypeKind::Tuple(tys) => tys.iter().any(|t| t.has_infer_vars()),
            TypeKind::Array { element, .. } => element.has_infer_vars(),
            TypeKind::Slice { element } => element.has_infer_vars(),
            TypeKind::Ref { inner, .. } => inner.has_infer_vars(),
            TypeKind::Fn { params, ret } => {
                params.iter().any(|t| t.has_infer_vars()) || ret.has_infer_vars()
            }
            TypeKind::Adt { args, .. } => args.iter().any(|t| t.has_infer_vars()),
        }
    }

    /// Decide whether a receiver of this type can be treated as equal to
    /// `other`, an impl block's self type.
    ///
    /// Inference variables and generic parameters match anything; deciding
    /// what they actually instantiate to is the unifier's job, after a
    /// single candidate has been chosen.
    ///
    /// With `strict == false`, a single reference layer on either side is
    /// tolerated, so `&Point` matches an `impl` for `Point` and vice versa.
    /// Exactly one comparison is made; this never walks a deref chain.
    /// Callers that want multi-step auto-deref re-invoke the probe once per
    /// step.
    pub fn can_eq(&self, other: &Type, strict: bool) -> bool {
        if self.structural_eq(other) {
            return true;
        }
        if strict {
            return false;
        }
        if let TypeKind::Ref { inner, .. } = self.kind() {
            if inner.structural_eq(other) {
                return true;
            }
        }
        if let TypeKind::Ref { inner, .. } = other.kind() {
            if self.structural_eq(inner) {
                return true;
            }
        }
        false
    }

    /// Structural equality with type variables acting as wildcards.
    fn structural_eq(&self, other: &Type) -> bool {
        match (self.kind(), other.kind()) {
            // Type variables unify with anything
            (TypeKind::Infer(_), _)
            | (_, TypeKind::Infer(_))
            | (TypeKind::Param(_), _)
            | (_, TypeKind::Param(_)) => true,

            (TypeKind::Primitive(p1), TypeKind::Primitive(p2)) => p1 == p2,

            (TypeKind::Tuple(ts1), TypeKind::Tuple(ts2)) => {
                ts1.len() == ts2.len()
                    && ts1.iter().zip(ts2).all(|(a, b)| a.structural_eq(b))
            }

            (
                TypeKind::Array {
                    element: e1,
                    size: l1,
                },
                TypeKind::Array {
                    element: e2,
                    size: l2,
                },
            ) => l1 == l2 && e1.structural_eq(e2),

            (TypeKind::Slice { element: e1 }, TypeKind::Slice { element: e2 }) => {
                e1.structural_eq(e2)
            }

            (
                TypeKind::Ref {
                    inner: i1,
                    mutable: m1,
                },
                TypeKind::Ref {
                    inner: i2,
                    mutable: m2,
                },
            ) => m1 == m2 && i1.structural_eq(i2),

            (
                TypeKind::Fn {
                    params: p1,
                    ret: r1,
                },
                TypeKind::Fn {
                    params: p2,
                    ret: r2,
                },
            ) => {
                p1.len() == p2.len()
                    && p1.iter().zip(p2).all(|(a, b)| a.structural_eq(b))
                    && r1.structural_eq(r2)
            }

            (
                TypeKind::Adt {
                    def_id: d1,
                    args: a1,
                },
                TypeKind::Adt {
                    def_id: d2,
                    args: a2,
                },
            ) => {
                d1 == d2
                    && a1.len() == a2.len()
                    && a1.iter().zip(a2).all(|(a, b)| a.structural_eq(b))
            }

            (TypeKind::Never, TypeKind::Never) => true,

            // Error types never equal anything, themselves included
            _ => false,
        }
    }

    // Convenience constructors for common types

    /// Create the unit type `()`.
    pub fn unit() -> Self {
        Self::new(TypeKind::Tuple(Vec::new()))
    }

    /// Create the never type `!`.
    pub fn never() -> Self {
        Self::new(TypeKind::Never)
    }

    /// Create an error type (used for error recovery).
    pub fn error() -> Self {
        Self::new(TypeKind::Error)
    }

    /// Create a boolean type.
    pub fn bool() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Bool))
    }

    /// Create an i32 type.
    pub fn i32() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Int(IntTy::I32)))
    }

    /// Create an i64 type.
    pub fn i64() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Int(IntTy::I64)))
    }

    /// Create a u32 type.
    pub fn u32() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Uint(UintTy::U32)))
    }

    /// Create a usize type.
    pub fn usize() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Uint(UintTy::Usize)))
    }

    /// Create an f64 type.
    pub fn f64() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Float(FloatTy::F64)))
    }

    /// Create a char type.
    pub fn char() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Char))
    }

    /// Create a str type.
    pub fn str() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Str))
    }

    /// Create an inference variable.
    pub fn infer(id: TyVarId) -> Self {
        Self::new(TypeKind::Infer(id))
    }

    /// Create a type parameter.
    pub fn param(id: TyVarId) -> Self {
        Self::new(TypeKind::Param(id))
    }

    /// Create a reference type.
    pub fn reference(inner: Type, mutable: bool) -> Self {
        Self::new(TypeKind::Ref { inner, mutable })
    }

    /// Create an array type.
    pub fn array(element: Type, size: u64) -> Self {
        Self::new(TypeKind::Array { element, size })
    }

    /// Create a slice type.
    pub fn slice(element: Type) -> Self {
        Self::new(TypeKind::Slice { element })
    }

    /// Create a tuple type.
    pub fn tuple(elements: Vec<Type>) -> Self {
        Self::new(TypeKind::Tuple(elements))
    }

    /// Create a function type.
    pub fn function(params: Vec<Type>, ret: Type) -> Self {
        Self::new(TypeKind::Fn { params, ret })
    }

    /// Create an ADT (struct) type.
    pub fn adt(def_id: DefId, args: Vec<Type>) -> Self {
        Self::new(TypeKind::Adt { def_id, args })
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// The kind of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A primitive type: `i32`, `f64`, `bool`, etc.
    Primitive(PrimitiveTy),

    /// A tuple type: `()`, `(T,)`, `(T, U)`
    Tuple(Vec<Type>),

    /// An array type: `[T; N]`
    Array { element: Type, size: u64 },

    /// A slice type: `[T]`
    Slice { element: Type },

    /// A reference type: `&T`, `&mut T`
    Ref { inner: Type, mutable: bool },

    /// A function type: `fn(A, B) -> C`
    Fn { params: Vec<Type>, ret: Type },

    /// An algebraic data type (struct).
    Adt {
        /// The definition ID of the type.
        def_id: DefId,
        /// Type arguments (for generic types).
        args: Vec<Type>,
    },

    /// A type variable for inference.
    Infer(TyVarId),

    /// A type parameter (generic).
    Param(TyVarId),

    /// The never type: `!`
    Never,

    /// An error type (for error recovery).
    Error,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Primitive(p) => write!(f, "{p}"),
            TypeKind::Tuple(tys) if tys.is_empty() => write!(f, "()"),
            TypeKind::Tuple(tys) if tys.len() == 1 => write!(f, "({},)", tys[0]),
            TypeKind::Tuple(tys) => {
                write!(f, "(")?;
                for (i, ty) in tys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{ty}")?;
                }
                write!(f, ")")
            }
            TypeKind::Array { element, size } => write!(f, "[{element}; {size}]"),
            TypeKind::Slice { element } => write!(f, "[{element}]"),
            TypeKind::Ref {
                inner,
                mutable: false,
            } => write!(f, "&{inner}"),
            TypeKind::Ref {
                inner,
                mutable: true,
            } => write!(f, "&mut {inner}"),
            TypeKind::Fn { params, ret } => {
                write!(f, "fn(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ") -> {ret}")
            }
            TypeKind::Adt { def_id, args } if args.is_empty() => {
                write!(f, "{def_id}")
            }
            TypeKind::Adt { def_id, args } => {
                write!(f, "{def_id}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            TypeKind::Infer(id) => write!(f, "?{}", id.0),
            TypeKind::Param(id) => write!(f, "T{}", id.0),
            TypeKind::Never => write!(f, "!"),
            TypeKind::Error => write!(f, "{{error}}"),
        }
    }
}

/// A primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTy {
    /// Signed integers: `i8`, `i16`, `i32`, `i64`, `i128`, `isize`
    Int(IntTy),
    /// Unsigned integers: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`
    Uint(UintTy),
    /// Floating-point: `f32`, `f64`
    Float(FloatTy),
    /// Boolean: `bool`
    Bool,
    /// Character: `char`
    Char,
    /// String slice: `str`
    Str,
    /// Unit type: `()`
    Unit,
}

impl fmt::Display for PrimitiveTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveTy::Int(int_ty) => write!(f, "{int_ty}"),
            PrimitiveTy::Uint(uint_ty) => write!(f, "{uint_ty}"),
            PrimitiveTy::Float(float_ty) => write!(f, "{float_ty}"),
            PrimitiveTy::Bool => write!(f, "bool"),
            PrimitiveTy::Char => write!(f, "char"),
            PrimitiveTy::Str => write!(f, "str"),
            PrimitiveTy::Unit => write!(f, "()"),
        }
    }
}

impl fmt::Display for IntTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntTy::I8 => "i8",
            IntTy::I16 => "i16",
            IntTy::I32 => "i32",
            IntTy::I64 => "i64",
            IntTy::I128 => "i128",
            IntTy::Isize => "isize",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for UintTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UintTy::U8 => "u8",
            UintTy::U16 => "u16",
            UintTy::U32 => "u32",
            UintTy::U64 => "u64",
            UintTy::U128 => "u128",
            UintTy::Usize => "usize",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for FloatTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FloatTy::F32 => "f32",
            FloatTy::F64 => "f64",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_eq_strict() {
        assert!(Type::i32().can_eq(&Type::i32(), true));
        assert!(!Type::i32().can_eq(&Type::i64(), true));
        assert!(!Type::reference(Type::i32(), false).can_eq(&Type::i32(), true));
    }

    #[test]
    fn test_can_eq_param_wildcard() {
        let point = DefId::new(7);
        let generic = Type::adt(point, vec![Type::param(TyVarId::new(1))]);
        let concrete = Type::adt(point, vec![Type::i32()]);
        assert!(concrete.can_eq(&generic, true));
        assert!(generic.can_eq(&concrete, true));
    }

    #[test]
    fn test_can_eq_single_ref_layer() {
        let point = Type::adt(DefId::new(3), vec![]);
        let point_ref = Type::reference(point.clone(), false);
        let point_ref_ref = Type::reference(point_ref.clone(), false);

        assert!(point_ref.can_eq(&point, false));
        assert!(point.can_eq(&point_ref, false));
        // only one layer is peeled
        assert!(!point_ref_ref.can_eq(&point, false));
    }

    #[test]
    fn test_error_type_matches_nothing() {
        assert!(!Type::error().can_eq(&Type::error(), false));
        assert!(!Type::error().can_eq(&Type::i32(), false));
    }

    #[test]
    fn test_display() {
        let ty = Type::function(vec![Type::i32(), Type::str()], Type::unit());
        assert_eq!(ty.to_string(), "fn(i32, str) -> ()");
        assert_eq!(Type::reference(Type::bool(), true).to_string(), "&mut bool");
    }
}
