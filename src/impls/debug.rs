use core::fmt;

use crate::ops::Struct;

/// Debug formatter for any [`Struct`] value.
///
/// Prints the struct's type path followed by each field, in declaration
/// order, using the fields' own [`reflect_debug`] implementations. This is
/// the `reflect_debug` body generated by the derive macro, and is also usable
/// from manual implementations.
///
/// # Examples
///
/// ```
/// use kvc::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 1, b: true };
/// let out = format!("{:?}", foo.as_reflect());
/// assert!(out.ends_with("Foo { a: 1, b: true }"));
/// ```
///
/// [`reflect_debug`]: crate::Reflect::reflect_debug
pub fn struct_debug(value: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(value.reflect_type_info().type_name());
    for (index, field) in value.iter_fields().enumerate() {
        if let Some(name) = value.name_at(index) {
            debug.field(name, &field);
        }
    }
    debug.finish()
}
