//! Compile-time type metadata produced by the derive macro.
//!
//! - [`Typed`]: gives a type a single, lazily-created [`TypeInfo`].
//! - [`TypeInfo`]: either [`StructInfo`] (named fields) or [`OpaqueInfo`].
//! - [`StructInfo`] / [`NamedField`]: field names and field type ids,
//!   queryable without an instance of the type.

// -----------------------------------------------------------------------------
// Modules

mod struct_info;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use struct_info::{NamedField, StructInfo};
pub use type_info::{OpaqueInfo, TypeInfo, Typed};
