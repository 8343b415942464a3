use core::any::{Any, TypeId, type_name};

use hashbrown::HashMap;

use crate::ops::Struct;

// -----------------------------------------------------------------------------
// StructInfo

/// A container for compile-time named struct info.
///
/// # Examples
///
/// ```rust
/// use kvc::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
/// ```
#[derive(Debug)]
pub struct StructInfo {
    ty_id: TypeId,
    type_name: &'static str,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Struct>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            fields: fields.into(),
            field_indices,
        }
    }

    /// Returns the [`TypeId`] of the described struct.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the full path of the described struct.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the index for the given field `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// # Examples
///
/// ```
/// use kvc::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     field_a: f32,
/// }
///
/// let info = <Foo as Typed>::type_info().as_struct().unwrap();
/// let field_info = info.field_at(0).unwrap();
///
/// assert!(field_info.type_is::<f32>());
/// assert_eq!(field_info.name(), "field_a");
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    type_name: &'static str,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub fn new<T: Any>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            type_name: type_name::<T>(),
        }
    }

    /// Returns the `TypeId` of the field's type.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the full path of the field's type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
