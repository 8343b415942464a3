use core::any::{Any, TypeId, type_name};

use crate::Reflect;
use crate::info::StructInfo;
use crate::ops::ReflectKind;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to a type's [`TypeInfo`].
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by the
/// built-in leaf implementations. The info is created on first access and
/// cached for the lifetime of the program.
///
/// # Examples
///
/// ```
/// use kvc::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     val: f32,
/// }
///
/// let info = <Foo as Typed>::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 1);
/// ```
pub trait Typed: Reflect + Sized {
    /// Returns the compile-time info for this type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
#[derive(Debug)]
pub enum TypeInfo {
    Struct(StructInfo),
    Opaque(OpaqueInfo),
}

impl TypeInfo {
    /// Returns the [`TypeId`] of the described type.
    pub fn ty_id(&self) -> TypeId {
        match self {
            TypeInfo::Struct(info) => info.ty_id(),
            TypeInfo::Opaque(info) => info.ty_id(),
        }
    }

    /// Returns the full path of the described type.
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeInfo::Struct(info) => info.type_name(),
            TypeInfo::Opaque(info) => info.type_name(),
        }
    }

    /// Returns the [`ReflectKind`] of the described type.
    pub fn kind(&self) -> ReflectKind {
        match self {
            TypeInfo::Struct(_) => ReflectKind::Struct,
            TypeInfo::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Check if the described type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Returns the inner [`StructInfo`], if this describes a struct.
    pub fn as_struct(&self) -> Option<&StructInfo> {
        match self {
            TypeInfo::Struct(info) => Some(info),
            TypeInfo::Opaque(_) => None,
        }
    }

    /// Returns `true` if this describes a struct.
    #[inline]
    pub fn is_struct(&self) -> bool {
        matches!(self, TypeInfo::Struct(_))
    }
}

// -----------------------------------------------------------------------------
// OpaqueInfo

/// Information for a leaf type without reflectable interior.
#[derive(Debug)]
pub struct OpaqueInfo {
    ty_id: TypeId,
    type_name: &'static str,
}

impl OpaqueInfo {
    /// Creates a new [`OpaqueInfo`] for the type `T`.
    pub fn new<T: Any + ?Sized>() -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the described type.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the full path of the described type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
