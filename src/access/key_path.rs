//! Provide multi-segment key path accessing support.

use core::fmt;

use crate::Reflect;
use crate::access::{AccessError, Key};

// -----------------------------------------------------------------------------
// Error

/// An error returned from a failed [`KeyPath`] resolution.
///
/// The [`KeyValueAccess`](crate::KeyValueAccess) surface collapses every
/// failure into `None`; this type is for callers that want to know why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    /// A segment failed to resolve.
    /// See [`AccessError`] for details.
    AccessError(AccessError<'static>),
    /// The resolved value cannot downcast to the requested type.
    InvalidDowncast,
}

impl fmt::Display for KeyPathError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessError(err) => fmt::Display::fmt(err, f),
            Self::InvalidDowncast => {
                f.write_str("Can't downcast result of access to the given type")
            }
        }
    }
}

impl core::error::Error for KeyPathError {}

impl From<AccessError<'static>> for KeyPathError {
    #[inline]
    fn from(value: AccessError<'static>) -> Self {
        Self::AccessError(value)
    }
}

// -----------------------------------------------------------------------------
// Reusable multi-segment accessor

/// A parsed, reusable key path.
///
/// [`Key`] only allows access to a single level, while this type resolves a
/// complete `.`-delimited path. The path string is split once during
/// initialization and can then be resolved against any number of values
/// without re-parsing.
///
/// Parsing never fails: any string splits into segments, and resolution
/// decides whether each segment exists.
///
/// # Examples
///
/// ```
/// use kvc::{access::KeyPath, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Inner {
///     value: u8,
/// }
///
/// #[derive(Reflect)]
/// struct Outer {
///     inner: Inner,
/// }
///
/// let path = KeyPath::parse("inner.value");
///
/// let a = Outer { inner: Inner { value: 4 } };
/// let b = Outer { inner: Inner { value: 13 } };
///
/// assert_eq!(path.resolve_as::<u8>(&a).ok(), Some(&4));
/// assert_eq!(path.resolve_as::<u8>(&b).ok(), Some(&13));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(Box<[(usize, Key<'static>)]>);

impl KeyPath {
    /// Splits the path string and creates a [`KeyPath`].
    ///
    /// This copies each segment into an owned [`Key`], so the accessor can
    /// outlive the path string.
    pub fn parse(path: &str) -> Self {
        Self(
            Key::split_path(path)
                .map(|(offset, key)| (offset, key.into_owned()))
                .collect(),
        )
    }

    /// Returns the number of segments in the path.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kvc::access::KeyPath;
    /// assert_eq!(KeyPath::parse("a.b.c").len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a reference to the value specified by the path.
    ///
    /// The accessor itself will not change and can be reused.
    pub fn resolve<'r>(&self, base: &'r dyn Reflect) -> Result<&'r dyn Reflect, KeyPathError> {
        let mut it = base;
        for (offset, key) in &self.0 {
            it = match key.access(it, Some(*offset)) {
                Ok(value) => value,
                Err(err) => return Err(KeyPathError::AccessError(err)),
            };
        }
        Ok(it)
    }

    /// Returns a typed reference to the value specified by the path.
    ///
    /// The accessor itself will not change and can be reused.
    #[inline]
    pub fn resolve_as<'r, T: Reflect>(&self, base: &'r dyn Reflect) -> Result<&'r T, KeyPathError> {
        let res = self.resolve(base)?;
        match res.downcast_ref::<T>() {
            Some(value) => Ok(value),
            None => Err(KeyPathError::InvalidDowncast),
        }
    }

    /// Concat two `KeyPath`.
    ///
    /// Note that this will not adjust the stored offsets, so error messages
    /// for the appended segments keep their original positions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kvc::access::KeyPath;
    /// let a = KeyPath::parse("a.b");
    /// let b = KeyPath::parse("c");
    /// assert_eq!(a.concat(b).len(), 3);
    /// ```
    pub fn concat(self, other: KeyPath) -> Self {
        let mut segments = self.0.into_vec();
        segments.extend(other.0);
        Self(segments.into_boxed_slice())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (_, key)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(key, f)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{KeyPath, KeyPathError};
    use crate::access::AccessErrorKind;
    use crate::derive::Reflect;
    use crate::ops::ReflectKind;
    use crate::KeyValueAccess;

    #[derive(Reflect)]
    struct Person {
        name: String,
        age: u32,
    }

    #[derive(Reflect)]
    struct Holder {
        person: Person,
    }

    fn holder() -> Holder {
        Holder {
            person: Person {
                name: String::from("Hello World"),
                age: 42,
            },
        }
    }

    #[test]
    fn resolve_nested() {
        let holder = holder();
        let path = KeyPath::parse("person.age");

        assert_eq!(path.len(), 2);
        assert_eq!(path.resolve_as::<u32>(&holder).ok(), Some(&42));

        // Same traversal as the one-shot walk.
        assert_eq!(
            path.resolve(&holder).ok().map(|v| v.ty_id()),
            holder.value_at_path("person.age").map(|v| v.ty_id()),
        );
    }

    #[test]
    fn reuse_across_values() {
        let path = KeyPath::parse("person.name");

        let a = holder();
        let mut b = holder();
        b.person.name = String::from("other");

        assert_eq!(
            path.resolve_as::<String>(&a).ok().map(String::as_str),
            Some("Hello World"),
        );
        assert_eq!(
            path.resolve_as::<String>(&b).ok().map(String::as_str),
            Some("other"),
        );
    }

    #[test]
    fn missing_segment_reports_offset() {
        let holder = holder();
        let err = KeyPath::parse("person.missing")
            .resolve(&holder)
            .unwrap_err();

        match err {
            KeyPathError::AccessError(err) => {
                assert_eq!(err.kind(), &AccessErrorKind::MissingField(ReflectKind::Struct));
                assert_eq!(err.key().name(), "missing");
                assert_eq!(err.offset(), Some(7));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn descend_through_leaf_fails() {
        let holder = holder();
        let err = KeyPath::parse("person.age.digits")
            .resolve(&holder)
            .unwrap_err();

        match err {
            KeyPathError::AccessError(err) => {
                assert_eq!(err.kind(), &AccessErrorKind::NotAStruct(ReflectKind::Opaque));
                assert_eq!(err.offset(), Some(11));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn wrong_terminal_type() {
        let holder = holder();
        let err = KeyPath::parse("person.age")
            .resolve_as::<i64>(&holder)
            .unwrap_err();

        assert_eq!(err, KeyPathError::InvalidDowncast);
    }

    #[test]
    fn display_round_trip() {
        let path = KeyPath::parse("person.age");
        assert_eq!(path.to_string(), "person.age");
        assert_eq!(KeyPath::parse("").to_string(), "");
    }
}
