//! Provide single-segment key accessing support.

use core::fmt;
use std::borrow::Cow;

use crate::Reflect;
use crate::ops::{ReflectKind, ReflectRef};

// -----------------------------------------------------------------------------
// Key

/// A **singular** field-name access within a key path.
///
/// The fundamental component of key-path access: one segment, naming one
/// field on one struct value.
///
/// # Examples
///
/// ```
/// use kvc::{access::Key, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 11, b: true };
///
/// let key = Key::new("a");
/// let elem = key.access(&foo, None).unwrap().downcast_ref::<i32>().unwrap();
/// assert_eq!(*elem, 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key<'a>(Cow<'a, str>);

impl<'a> Key<'a> {
    /// Creates a key for the given field name.
    #[inline]
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the field name this key refers to.
    #[inline]
    pub fn name(&self) -> &str {
        self.0.as_ref()
    }

    /// Converts this into an "owned" value.
    #[inline]
    pub fn into_owned(self) -> Key<'static> {
        Key(Cow::Owned(self.0.into_owned()))
    }

    /// Splits a `.`-delimited key path into its segments.
    ///
    /// Splitting never fails; resolution decides whether a segment exists.
    /// The empty path yields one empty segment, which no struct field can
    /// match. Each segment is paired with its byte offset in `path`, used
    /// for error reporting.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvc::access::Key;
    ///
    /// let segments: Vec<_> = Key::split_path("a.bc.d").collect();
    /// assert_eq!(
    ///     segments,
    ///     [(0, Key::new("a")), (2, Key::new("bc")), (5, Key::new("d"))],
    /// );
    /// ```
    pub fn split_path(path: &str) -> impl Iterator<Item = (usize, Key<'_>)> {
        path.split('.').scan(0_usize, |offset, segment| {
            let at = *offset;
            *offset += segment.len() + 1;
            Some((at, Key(Cow::Borrowed(segment))))
        })
    }

    /// Dynamically accesses the named field; on success returns a shared
    /// reference to its value.
    ///
    /// `offset` is only used for error reporting, it does not affect access.
    pub fn access<'r>(
        &self,
        base: &'r dyn Reflect,
        offset: Option<usize>,
    ) -> Result<&'r dyn Reflect, AccessError<'a>> {
        let kind = base.reflect_kind();

        let res = match base.reflect_ref() {
            ReflectRef::Struct(value) => value
                .field(self.name())
                .ok_or(AccessErrorKind::MissingField(kind)),
            ReflectRef::Opaque(_) => Err(AccessErrorKind::NotAStruct(kind)),
        };

        res.map_err(|kind| AccessError {
            kind,
            key: self.clone(),
            offset,
        })
    }
}

impl fmt::Display for Key<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// Error

/// The kind of [`AccessError`], along with some kind-specific information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessErrorKind {
    /// The base value is a struct, but has no field with the given name.
    MissingField(ReflectKind),
    /// The base value is not a struct and cannot be descended into.
    NotAStruct(ReflectKind),
}

/// An error originating from a [`Key`] access on a value.
///
/// Use the `Display` impl of this type to get information on the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError<'a> {
    kind: AccessErrorKind,
    key: Key<'a>,
    offset: Option<usize>,
}

impl<'a> AccessError<'a> {
    /// Returns the kind of [`AccessError`].
    #[inline]
    pub fn kind(&self) -> &AccessErrorKind {
        &self.kind
    }

    /// Returns the [`Key`] that this [`AccessError`] occurred in.
    #[inline]
    pub fn key(&self) -> &Key<'_> {
        &self.key
    }

    /// If an offset was provided, returns the byte offset of the failing
    /// segment in its path string.
    #[inline]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Converts this into an "owned" value.
    #[inline]
    pub fn into_owned(self) -> AccessError<'static> {
        AccessError {
            kind: self.kind,
            key: self.key.into_owned(),
            offset: self.offset,
        }
    }
}

impl fmt::Display for AccessError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let AccessError { kind, key, offset } = self;

        write!(f, "Error accessing element with `{key}` key")?;
        if let Some(offset) = offset {
            write!(f, " (offset {offset})")?;
        }
        write!(f, ": ")?;

        match kind {
            AccessErrorKind::MissingField(type_accessed) => write!(
                f,
                "The {type_accessed} accessed doesn't have a field named `{key}`",
            ),
            AccessErrorKind::NotAStruct(actual) => write!(
                f,
                "Expected the key to access a struct, found a {actual} instead",
            ),
        }
    }
}

impl core::error::Error for AccessError<'_> {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{AccessErrorKind, Key};
    use crate::derive::Reflect;
    use crate::ops::ReflectKind;

    #[derive(Reflect)]
    struct Foo {
        a: i32,
        b: bool,
    }

    fn foo() -> Foo {
        Foo { a: 11, b: true }
    }

    #[test]
    fn access_existing_field() {
        let foo = foo();

        let elem = Key::new("b").access(&foo, None).unwrap();
        assert_eq!(elem.downcast_ref::<bool>(), Some(&true));
    }

    #[test]
    fn missing_field() {
        let foo = foo();
        let err = Key::new("c").access(&foo, Some(4)).unwrap_err();

        assert_eq!(err.kind(), &AccessErrorKind::MissingField(ReflectKind::Struct));
        assert_eq!(err.offset(), Some(4));
        assert_eq!(
            err.to_string(),
            "Error accessing element with `c` key (offset 4): \
             The struct accessed doesn't have a field named `c`",
        );
    }

    #[test]
    fn descend_into_leaf() {
        let err = Key::new("a").access(&5_i32, None).unwrap_err();

        assert_eq!(err.kind(), &AccessErrorKind::NotAStruct(ReflectKind::Opaque));
        assert_eq!(
            err.to_string(),
            "Error accessing element with `a` key: \
             Expected the key to access a struct, found a opaque instead",
        );
    }

    #[test]
    fn split_path_offsets() {
        let segments: Vec<_> = Key::split_path("ab.c.def").collect();
        assert_eq!(
            segments,
            [(0, Key::new("ab")), (3, Key::new("c")), (5, Key::new("def"))],
        );

        // The empty path is one empty segment, it can never match a field.
        let segments: Vec<_> = Key::split_path("").collect();
        assert_eq!(segments, [(0, Key::new(""))]);
    }
}
