use core::any::{Any, TypeId};
use core::fmt;

use crate::info::TypeInfo;
use crate::ops::{ReflectKind, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime field access in [`kvc`](crate).
///
/// A `Reflect` value is either a [`Struct`] (an aggregate whose fields are
/// enumerable by name, in declaration order) or [`Opaque`] (a leaf value with
/// no reflectable interior). Key-value coding walks `Struct` values segment by
/// segment and downcasts the final leaf to the caller-requested type.
///
/// # Recommendations
///
/// It's strongly recommended to use [the derive macro for `Reflect`] rather
/// than manually implementing this trait. The derive macro implements this
/// trait along with [`Struct`] and [`Typed`] based on the type's structure.
///
/// # Type Identification
///
/// While `Reflect` supports [`Any`], note that [`Any::type_id`] on
/// `Box<dyn Reflect>` returns the container's type ID, not the inner value's.
/// Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// use kvc::Reflect;
/// use core::any::{Any, TypeId};
///
/// let x: Box<dyn Reflect> = Box::new(32_i32).into_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!((*x).type_id() == TypeId::of::<i32>()); // Dereferenced works
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Downcasting
///
/// Use `downcast_ref` for concrete type conversion:
///
/// ```rust
/// use kvc::Reflect;
///
/// let x: &dyn Reflect = (&10_i32).as_reflect();
/// let y = x.downcast_ref::<i32>().unwrap();
/// assert_eq!(*y, 10);
/// ```
///
/// [`Struct`]: crate::ops::Struct
/// [`Opaque`]: crate::ops::ReflectKind::Opaque
/// [`Typed`]: crate::info::Typed
/// [`Any`]: core::any::Any
/// [the derive macro for `Reflect`]: crate::derive::Reflect
pub trait Reflect: Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use kvc::Reflect;
    ///
    /// let x = 32;
    /// let r: &dyn Reflect = x.as_reflect();
    /// // Equal to this:
    /// // let r: &dyn Reflect = &x;
    /// ```
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use kvc::Reflect;
    ///
    /// let x = Box::new(32);
    /// let r = x.into_reflect();
    /// // Equal to this:
    /// // let r = x as Box<dyn Reflect>;
    /// ```
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Return the [`TypeId`] of the underlying type.
    ///
    /// When you call `Box<dyn Reflect>::type_id`, it will return the
    /// [`TypeId`] of the entire container, instead of the inner value.
    /// This is prone to errors, so we provide this method.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [`TypeInfo`] of the underlying type.
    fn reflect_type_info(&self) -> &'static TypeInfo;

    /// Returns a pure enumeration of ["kinds"](ReflectKind) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kvc::{Reflect, ops::ReflectKind};
    /// assert_eq!(10_i32.reflect_kind(), ReflectKind::Opaque);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of type.
    ///
    /// This is the entry point for traversal: a [`ReflectRef::Struct`] can be
    /// descended into, a [`ReflectRef::Opaque`] cannot.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Debug formatter for the value.
    ///
    /// Backs the [`Debug`](fmt::Debug) implementation of `dyn Reflect`, so
    /// type-erased lookup results stay printable.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kvc::Reflect;
    /// let x: &dyn Reflect = (&10_i32).as_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// assert!(!x.is::<bool>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kvc::Reflect;
    /// let x: &dyn Reflect = (&10_i32).as_reflect();
    ///
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<bool>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

/// Test-only reference identity, so unit tests can `assert_eq!` an
/// `Option<&dyn Reflect>` lookup result against `None`. Comparisons where
/// either side is `None` never invoke this body.
#[cfg(test)]
impl PartialEq for dyn Reflect {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(self, other)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::ops::{ReflectKind, Struct};
    use crate::{KeyValueAccess, Reflect};

    #[derive(Reflect)]
    struct Foo {
        a: i32,
        b: bool,
    }

    #[test]
    fn derived_struct_basics() {
        let foo = Foo { a: 1, b: true };

        assert_eq!(foo.reflect_kind(), ReflectKind::Struct);
        assert_eq!(foo.ty_id(), TypeId::of::<Foo>());

        let info = <Foo as Typed>::type_info().as_struct().unwrap();
        assert_eq!(info.field_len(), 2);
        assert_eq!(info.field("a").map(|f| f.type_is::<i32>()), Some(true));
        assert_eq!(info.index_of("b"), Some(1));

        assert_eq!(foo.field_len(), 2);
        assert_eq!(foo.name_at(0), Some("a"));
        // The full path in the output depends on where the type is declared.
        let rendered = format!("{:?}", foo.as_reflect());
        assert!(rendered.ends_with("Foo { a: 1, b: true }"), "{rendered}");
    }

    #[test]
    fn derived_unit_struct_is_opaque() {
        #[derive(Reflect)]
        struct Marker;

        let marker = Marker;
        assert_eq!(marker.reflect_kind(), ReflectKind::Opaque);
        assert!(!<Marker as Typed>::type_info().is_struct());
        assert_eq!(format!("{:?}", marker.as_reflect()), "Marker");
        assert_eq!(marker.value_for_key("anything"), None);
    }

    #[test]
    fn ignored_fields_are_invisible() {
        #[derive(Reflect)]
        struct Cached {
            value: u64,
            #[reflect(ignore)]
            dirty: bool,
            label: &'static str,
        }

        let cached = Cached {
            value: 9,
            dirty: true,
            label: "x",
        };

        // Indices are renumbered around the ignored field.
        assert_eq!(cached.field_len(), 2);
        assert_eq!(cached.name_at(1), Some("label"));
        assert_eq!(cached.value_for_key_as::<u64>("value"), Some(&9));
        assert_eq!(cached.value_for_key("dirty"), None);

        let info = <Cached as Typed>::type_info().as_struct().unwrap();
        assert_eq!(info.field_len(), 2);
        assert!(info.field("dirty").is_none());
    }

    #[test]
    fn generic_struct_info_per_instantiation() {
        #[derive(Reflect)]
        struct Wrapper<T> {
            inner: T,
        }

        let a = Wrapper { inner: 1_u8 };
        let b = Wrapper { inner: true };

        assert_eq!(a.value_for_key_as::<u8>("inner"), Some(&1));
        assert_eq!(b.value_for_key_as::<bool>("inner"), Some(&true));

        let info_a = <Wrapper<u8> as Typed>::type_info();
        let info_b = <Wrapper<bool> as Typed>::type_info();
        assert_ne!(info_a.ty_id(), info_b.ty_id());
        assert!(info_a.type_is::<Wrapper<u8>>());
    }

    #[test]
    fn empty_struct_has_no_fields() {
        #[derive(Reflect)]
        struct Empty {}

        let empty = Empty {};
        assert_eq!(empty.reflect_kind(), ReflectKind::Struct);
        assert_eq!(empty.field_len(), 0);
        assert_eq!(empty.value_for_key("a"), None);
    }
}
