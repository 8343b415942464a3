//! The key-value coding lookup surface.

use crate::Reflect;
use crate::access::Key;
use crate::ops::Struct;

// -----------------------------------------------------------------------------
// Trait

/// Access to an object's fields by string name or dotted key path, instead of
/// through direct member access.
///
/// All operations are pure, stateless and total: the only non-success outcome
/// is `None`, returned whenever a named field does not exist at some
/// traversal step, a non-terminal segment holds a non-struct value, or the
/// final value cannot downcast to the requested type. Callers cannot
/// distinguish "missing" from "wrong type" here; use
/// [`KeyPath::resolve_as`](crate::access::KeyPath::resolve_as) when the cause
/// matters.
///
/// This trait is implemented for every [`Reflect`] type as well as for
/// `dyn Reflect` and `dyn Struct`.
///
/// # Examples
///
/// ```
/// use kvc::{KeyValueAccess, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// #[derive(Reflect)]
/// struct Holder {
///     person: Person,
/// }
///
/// let holder = Holder {
///     person: Person {
///         name: String::from("Hello World"),
///         age: 42,
///     },
/// };
///
/// // Typed lookups.
/// assert_eq!(holder.value_at_path_as::<u32>("person.age"), Some(&42));
/// assert_eq!(holder.person.value_for_key_as::<u32>("age"), Some(&42));
///
/// // Untyped lookups; the result is a type-erased `&dyn Reflect`.
/// let name = holder.value_at_path("person.name").unwrap();
/// assert_eq!(name.downcast_ref::<String>().map(String::as_str), Some("Hello World"));
/// ```
pub trait KeyValueAccess {
    /// Returns the value for the field identified by the given key, as a
    /// type-erased `&dyn Reflect`.
    ///
    /// The key is a single field name, not a path: a `.` in `key` is just a
    /// character that no field name contains.
    fn value_for_key(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns the typed value for the field identified by the given key.
    ///
    /// Returns `None` if the field does not exist or its value is not a `T`.
    fn value_for_key_as<T: Reflect>(&self, key: &str) -> Option<&T>;

    /// Returns the value at the given `.`-delimited key path, as a
    /// type-erased `&dyn Reflect`.
    ///
    /// Resolution walks segments left to right and short-circuits to `None`
    /// on the first segment that does not name a field of a struct value.
    /// The empty path yields `None`.
    fn value_at_path(&self, path: &str) -> Option<&dyn Reflect>;

    /// Returns the typed value at the given `.`-delimited key path.
    ///
    /// Identical traversal to [`value_at_path`](KeyValueAccess::value_at_path);
    /// additionally returns `None` when the final value is not a `T`.
    fn value_at_path_as<T: Reflect>(&self, path: &str) -> Option<&T>;
}

// -----------------------------------------------------------------------------
// Base implementation

impl KeyValueAccess for dyn Reflect {
    #[inline(never)]
    fn value_for_key(&self, key: &str) -> Option<&dyn Reflect> {
        Key::new(key).access(self, None).ok()
    }

    #[inline]
    fn value_for_key_as<T: Reflect>(&self, key: &str) -> Option<&T> {
        // Not inlining `value_for_key` keeps the traversal compiled once per
        // impl, independent of `T`.
        KeyValueAccess::value_for_key(self, key)?.downcast_ref()
    }

    #[inline(never)]
    fn value_at_path(&self, path: &str) -> Option<&dyn Reflect> {
        let mut it: &dyn Reflect = self;
        for (offset, key) in Key::split_path(path) {
            it = key.access(it, Some(offset)).ok()?;
        }
        Some(it)
    }

    #[inline]
    fn value_at_path_as<T: Reflect>(&self, path: &str) -> Option<&T> {
        // Same non-inlining note as `value_for_key_as`.
        KeyValueAccess::value_at_path(self, path)?.downcast_ref()
    }
}

// -----------------------------------------------------------------------------
// Delegating implementations

macro_rules! impl_key_value_access {
    () => {
        #[inline(always)]
        fn value_for_key(&self, key: &str) -> Option<&dyn Reflect> {
            <dyn Reflect as KeyValueAccess>::value_for_key(self, key)
        }

        #[inline(always)]
        fn value_for_key_as<T: Reflect>(&self, key: &str) -> Option<&T> {
            <dyn Reflect as KeyValueAccess>::value_for_key_as::<T>(self, key)
        }

        #[inline(always)]
        fn value_at_path(&self, path: &str) -> Option<&dyn Reflect> {
            <dyn Reflect as KeyValueAccess>::value_at_path(self, path)
        }

        #[inline(always)]
        fn value_at_path_as<T: Reflect>(&self, path: &str) -> Option<&T> {
            <dyn Reflect as KeyValueAccess>::value_at_path_as::<T>(self, path)
        }
    };
}

impl<P: Sized + Reflect> KeyValueAccess for P {
    impl_key_value_access!();
}

impl KeyValueAccess for dyn Struct {
    impl_key_value_access!();
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::derive::Reflect;
    use crate::ops::{DynamicStruct, Struct};
    use crate::{KeyValueAccess, Reflect};

    #[derive(Reflect)]
    struct Person {
        name: String,
        age: u32,
    }

    #[derive(Reflect)]
    struct Holder {
        person: Person,
    }

    fn person() -> Person {
        Person {
            name: String::from("Hello World"),
            age: 42,
        }
    }

    fn holder() -> Holder {
        Holder { person: person() }
    }

    #[test]
    fn lookup_matching_type() {
        let person = person();

        assert_eq!(
            person.value_for_key_as::<String>("name").map(String::as_str),
            Some("Hello World"),
        );
        assert_eq!(person.value_for_key_as::<u32>("age"), Some(&42));
    }

    #[test]
    fn lookup_missing_field() {
        let person = person();

        assert_eq!(person.value_for_key("email"), None);
        assert_eq!(person.value_for_key_as::<u32>("email"), None);
    }

    #[test]
    fn lookup_mismatched_type() {
        let person = person();

        // The field exists, but holds a `u32`.
        assert_eq!(person.value_for_key_as::<i64>("age"), None);
        assert_eq!(person.value_for_key_as::<String>("age"), None);
    }

    #[test]
    fn path_equals_nested_lookup() {
        let holder = holder();

        assert_eq!(
            holder.value_at_path_as::<u32>("person.age"),
            holder.person.value_for_key_as::<u32>("age"),
        );
        assert_eq!(
            holder.value_at_path_as::<String>("person.name"),
            holder.person.value_for_key_as::<String>("name"),
        );
    }

    #[test]
    fn path_absent_cases() {
        let holder = holder();

        assert_eq!(holder.value_at_path(""), None);
        assert_eq!(holder.value_at_path("nonexistent"), None);
        assert_eq!(holder.value_at_path("person.missing"), None);
        assert_eq!(holder.value_at_path("missing.name"), None);
        // Descending through a leaf value short-circuits.
        assert_eq!(holder.value_at_path("person.age.digits"), None);
        // So does a trailing delimiter: the empty segment matches nothing.
        assert_eq!(holder.value_at_path("person.age."), None);
    }

    #[test]
    fn untyped_equals_typed_erased() {
        let holder = holder();

        for path in ["person.age", "person.name", "person", "missing", ""] {
            let untyped = holder.value_at_path(path).map(|v| v.ty_id());
            let typed = match path {
                "person.age" => holder.value_at_path_as::<u32>(path).map(|v| v.ty_id()),
                "person.name" => holder.value_at_path_as::<String>(path).map(|v| v.ty_id()),
                "person" => holder.value_at_path_as::<Person>(path).map(|v| v.ty_id()),
                _ => None,
            };
            assert_eq!(untyped, typed, "path: {path:?}");
        }

        let age = holder.value_at_path("person.age").unwrap();
        assert_eq!(age.downcast_ref::<u32>(), Some(&42));
    }

    #[test]
    fn single_key_is_not_a_path() {
        let holder = holder();

        // `value_for_key` treats the whole string as one field name.
        assert_eq!(holder.value_for_key("person.age"), None);
        assert!(holder.value_for_key("person").is_some());
    }

    #[test]
    fn lookup_on_leaf_values() {
        assert_eq!(5_i32.value_for_key("anything"), None);
        assert_eq!(5_i32.value_at_path("a.b"), None);
    }

    #[test]
    fn lookup_through_dyn_struct() {
        let person = person();
        let struct_ref: &dyn Struct = &person;

        assert_eq!(struct_ref.value_for_key_as::<u32>("age"), Some(&42));
        assert_eq!(struct_ref.value_at_path_as::<u32>("age"), Some(&42));
    }

    #[test]
    fn lookup_over_dynamic_struct() {
        let mut nested = DynamicStruct::new();
        nested.extend("leaf", 7_u8);

        let mut root = DynamicStruct::new();
        root.extend("nested", nested);
        root.extend("flag", true);

        assert_eq!(root.value_for_key_as::<bool>("flag"), Some(&true));
        assert_eq!(root.value_at_path_as::<u8>("nested.leaf"), Some(&7));
        assert_eq!(root.value_at_path_as::<u8>("nested.missing"), None);
    }

    #[test]
    fn mixed_static_and_dynamic_traversal() {
        let mut root = DynamicStruct::new();
        root.extend("person", person());

        assert_eq!(
            root.value_at_path_as::<String>("person.name").map(String::as_str),
            Some("Hello World"),
        );
    }
}
