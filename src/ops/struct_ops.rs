use core::fmt;
use std::borrow::Cow;

use hashbrown::HashMap;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, Typed};
use crate::ops::{ReflectKind, ReflectRef};

// -----------------------------------------------------------------------------
// Struct trait

/// A trait for type-erased access to aggregates with named fields.
///
/// This trait represents any fixed-size heterogeneous collection of named
/// values, including:
/// - Rust structs (e.g. `Foo { id: i32, name: String }`)
/// - Runtime-assembled aggregates ([`DynamicStruct`])
///
/// When using [`#[derive(Reflect)]`](crate::derive::Reflect) on a struct with
/// named fields, this trait will be automatically implemented.
///
/// # Note
///
/// This includes `struct T {}`, but not `struct T;`. The latter has no fields
/// to look up and is treated as [`Opaque`](crate::ops::ReflectKind::Opaque).
///
/// # Examples
///
/// ```
/// use kvc::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 10, b: true };
/// let foo_ref: &dyn Struct = &foo;
///
/// assert_eq!(foo_ref.field_len(), 2);
/// assert_eq!(foo_ref.field_as::<i32>("a"), Some(&10));
/// assert_eq!(foo_ref.field_at_as::<bool>(1), Some(&true));
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name` as a
    /// `&dyn Reflect`.
    ///
    /// Returns `None` if the field does not exist.
    ///
    /// If the field type is known, can use `<dyn Struct>::field_as` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kvc::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo { a: i32, b: bool }
    ///
    /// let foo = Foo { a: 1, b: true };
    ///
    /// assert!(foo.field("a").is_some());
    /// assert!(foo.field("c").is_none());
    /// ```
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a reference to the value of the field with index `index` as a
    /// `&dyn Reflect`.
    ///
    /// Returns `None` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kvc::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo { a: i32, b: bool }
    ///
    /// let foo = Foo { a: 1, b: true };
    ///
    /// assert!(foo.field_at(0).is_some());
    /// assert!(foo.field_at(2).is_none());
    /// ```
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the name of the field with index `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kvc::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo { a: i32, b: bool }
    ///
    /// let foo = Foo { a: 1, b: true };
    ///
    /// assert_eq!(foo.name_at(0), Some("a"));
    /// assert_eq!(foo.name_at(2), None);
    /// ```
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields in the struct.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the values of the struct's fields.
    ///
    /// The iterator yields references to each field in order, from index 0 to
    /// `field_len() - 1`.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    /// Returns a typed reference to the field at the given field name.
    ///
    /// Returns `None` if:
    /// - The field does not exist.
    /// - The field cannot be downcast to type `T`
    ///
    /// # Examples
    ///
    /// ```
    /// # use kvc::{ops::Struct, derive::Reflect};
    /// #[derive(Reflect)]
    /// struct Foo { a: i32, b: &'static str }
    ///
    /// let foo = Foo { a: 10, b: "hello" };
    /// let foo_ref: &dyn Struct = &foo;
    ///
    /// assert_eq!(foo_ref.field_as::<i32>("a"), Some(&10));
    /// assert_eq!(foo_ref.field_as::<&str>("b"), Some(&"hello"));
    /// assert_eq!(foo_ref.field_as::<i32>("c"), None); // Missing
    /// assert_eq!(foo_ref.field_as::<f64>("a"), None); // Wrong type
    /// ```
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns a typed reference to the field at the given index.
    ///
    /// Returns `None` if:
    /// - The index is out of bounds
    /// - The field cannot be downcast to type `T`
    #[inline]
    pub fn field_at_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.field_at(index).and_then(<dyn Reflect>::downcast_ref)
    }
}

// -----------------------------------------------------------------------------
// Struct Field Iterator

/// An iterator over the field values of a struct.
///
/// This is an [`ExactSizeIterator`] that yields references to each field in
/// the struct in declaration order.
///
/// # Examples
///
/// ```
/// use kvc::{derive::Reflect, ops::{Struct, StructFieldIter}};
///
/// #[derive(Reflect)]
/// struct Foo { a: i32, b: bool }
///
/// let foo = Foo { a: 1, b: true };
/// let mut iter = StructFieldIter::new(&foo);
///
/// assert_eq!(iter.len(), 2);
/// assert_eq!(iter.next().and_then(|v| v.downcast_ref::<i32>()), Some(&1));
/// ```
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len();
        (size - self.index, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructFieldIter<'a> {}

// -----------------------------------------------------------------------------
// Dynamic Struct

/// A runtime-assembled aggregate with named fields.
///
/// `DynamicStruct` holds any values implementing [`Reflect`] under string
/// names, in insertion order, and implements [`Struct`] itself, so key-value
/// coding works over values whose shape is only known at runtime.
///
/// # Type Information
///
/// Dynamic types are special in that their [`TypeInfo`] is [`OpaqueInfo`]
/// (there is no compile-time field list), but [`reflect_kind`] and
/// [`reflect_ref`] behave like a struct.
///
/// # Examples
///
/// ```
/// use kvc::{KeyValueAccess, ops::{DynamicStruct, Struct}};
///
/// let mut person = DynamicStruct::new();
/// person.extend("name", String::from("Hello World"));
/// person.extend("age", 42_u32);
///
/// assert_eq!(person.field_len(), 2);
/// assert_eq!(person.value_for_key_as::<u32>("age"), Some(&42));
/// ```
///
/// [`reflect_kind`]: Reflect::reflect_kind
/// [`reflect_ref`]: Reflect::reflect_ref
#[derive(Default)]
pub struct DynamicStruct {
    fields: Vec<Box<dyn Reflect>>,
    field_names: Vec<Cow<'static, str>>,
    field_indices: HashMap<Cow<'static, str>, usize>,
}

impl DynamicStruct {
    /// Creates an empty `DynamicStruct`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty `DynamicStruct` with at least the specified
    /// capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            field_names: Vec::with_capacity(capacity),
            field_indices: HashMap::with_capacity(capacity),
        }
    }

    /// Appends a boxed [`Reflect`] value to the end of the struct as a field.
    ///
    /// If the field name already exists, this will overwrite its value.
    ///
    /// This is the low-level version of [`extend`](DynamicStruct::extend)
    /// that accepts already-boxed values.
    pub fn extend_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Reflect>) {
        let name: Cow<'static, str> = name.into();
        if let Some(index) = self.field_indices.get(&name) {
            self.fields[*index] = value;
        } else {
            self.fields.push(value);
            self.field_indices
                .insert(name.clone(), self.fields.len() - 1);
            self.field_names.push(name);
        }
    }

    /// Appends a value to the end of the struct as a field.
    ///
    /// If the field name already exists, this will overwrite its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvc::ops::{DynamicStruct, Struct};
    ///
    /// let mut dynamic = DynamicStruct::new();
    /// dynamic.extend("field_a", 42_i32);
    /// dynamic.extend("field_b", "world");
    ///
    /// assert_eq!(dynamic.field_len(), 2);
    /// ```
    #[inline]
    pub fn extend<T: Reflect>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.extend_boxed(name, Box::new(value));
    }

    /// Gets the index of the field with the given name.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvc::ops::DynamicStruct;
    ///
    /// let mut dynamic = DynamicStruct::new();
    /// dynamic.extend("field_a", 42_i32);
    ///
    /// assert_eq!(dynamic.index_of("field_a"), Some(0));
    /// assert_eq!(dynamic.index_of("field_b"), None);
    /// ```
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }
}

impl Typed for DynamicStruct {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for DynamicStruct {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        <Self as Typed>::type_info()
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Struct
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Struct(self)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("DynamicStruct");
        for (name, value) in self.field_names.iter().zip(&self.fields) {
            debug.field(name.as_ref(), value);
        }
        debug.finish()
    }
}

impl Struct for DynamicStruct {
    #[inline]
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_indices
            .get(name)
            .map(|index| &*self.fields[*index])
    }

    #[inline]
    fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
        self.fields.get(index).map(|field| &**field)
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.field_names.get(index).map(AsRef::as_ref)
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

impl fmt::Debug for DynamicStruct {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Reflect>)> for DynamicStruct {
    fn from_iter<T: IntoIterator<Item = (N, Box<dyn Reflect>)>>(fields: T) -> Self {
        let mut dynamic_struct = DynamicStruct::new();
        for (name, value) in fields.into_iter() {
            dynamic_struct.extend_boxed(name, value);
        }
        dynamic_struct
    }
}

impl<'a> IntoIterator for &'a DynamicStruct {
    type Item = &'a dyn Reflect;
    type IntoIter = StructFieldIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_fields()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::DynamicStruct;
    use crate::Reflect;
    use crate::ops::{ReflectKind, Struct};

    fn sample() -> DynamicStruct {
        let mut dynamic = DynamicStruct::new();
        dynamic.extend("name", String::from("Hello World"));
        dynamic.extend("age", 42_u32);
        dynamic
    }

    #[test]
    fn field_access_by_name_and_index() {
        let dynamic = sample();

        assert_eq!(dynamic.field_len(), 2);
        assert_eq!(dynamic.name_at(0), Some("name"));
        assert_eq!(dynamic.name_at(1), Some("age"));
        assert_eq!(dynamic.index_of("age"), Some(1));

        let struct_ref: &dyn Struct = &dynamic;
        assert_eq!(struct_ref.field_as::<u32>("age"), Some(&42));
        assert_eq!(struct_ref.field_at_as::<u32>(1), Some(&42));
        assert_eq!(struct_ref.field_as::<u32>("missing"), None);
        assert_eq!(struct_ref.field_as::<i8>("age"), None);
    }

    #[test]
    fn extend_overwrites_existing_field() {
        let mut dynamic = sample();
        dynamic.extend("age", 7_u32);

        assert_eq!(dynamic.field_len(), 2);
        let struct_ref: &dyn Struct = &dynamic;
        assert_eq!(struct_ref.field_as::<u32>("age"), Some(&7));
    }

    #[test]
    fn behaves_like_a_struct() {
        let dynamic = sample();
        assert_eq!(dynamic.reflect_kind(), ReflectKind::Struct);
        assert!(dynamic.reflect_ref().as_struct().is_some());
        // The compile-time info stays opaque: there is no static field list.
        assert!(!dynamic.reflect_type_info().is_struct());
    }

    #[test]
    fn iteration_in_insertion_order() {
        let dynamic = sample();
        let mut iter = dynamic.iter_fields();

        assert_eq!(iter.len(), 2);
        assert!(iter.next().unwrap().is::<String>());
        assert_eq!(iter.next().and_then(|v| v.downcast_ref::<u32>()), Some(&42));
        assert!(iter.next().is_none());
    }
}
