use core::fmt;

use crate::Reflect;
use crate::ops::Struct;

// -----------------------------------------------------------------------------
// ReflectKind

/// A pure enumeration of the "kinds" a reflected value can have.
///
/// Key-value coding only distinguishes aggregates with named fields from
/// everything else: a [`Struct`] can be descended into by field name, an
/// [`Opaque`] value is a leaf.
///
/// # Examples
///
/// ```
/// use kvc::{Reflect, ops::ReflectKind};
///
/// assert_eq!(1_u8.reflect_kind(), ReflectKind::Opaque);
/// assert_eq!(String::from("hi").reflect_kind(), ReflectKind::Opaque);
/// ```
///
/// [`Struct`]: ReflectKind::Struct
/// [`Opaque`]: ReflectKind::Opaque
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReflectKind {
    /// An aggregate with named fields, in declaration order.
    Struct,
    /// A leaf value without reflectable interior.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectKind::Struct => f.write_str("struct"),
            ReflectKind::Opaque => f.write_str("opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of the "kinds" of a reflected value.
///
/// Obtained from [`Reflect::reflect_ref`]; the [`Struct`](ReflectRef::Struct)
/// variant carries the trait object used for by-name field access.
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this reference.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            ReflectRef::Struct(_) => ReflectKind::Struct,
            ReflectRef::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the inner [`Struct`] reference, if this is a struct.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvc::{Reflect, derive::Reflect};
    ///
    /// #[derive(Reflect)]
    /// struct Foo {
    ///     a: i32,
    /// }
    ///
    /// let foo = Foo { a: 1 };
    /// assert!(foo.reflect_ref().as_struct().is_some());
    /// assert!(1_i32.reflect_ref().as_struct().is_none());
    /// ```
    #[inline]
    pub fn as_struct(&self) -> Option<&'a dyn Struct> {
        match self {
            ReflectRef::Struct(value) => Some(*value),
            ReflectRef::Opaque(_) => None,
        }
    }
}
