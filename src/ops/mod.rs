//! Provide interfaces and dynamic types for data access.
//!
//! - [`Struct`]: the subtrait of [`Reflect`] for aggregates with named fields
//!   (e.g. `A { .. }`), giving access by field name and by declaration index.
//! - [`DynamicStruct`]: a runtime-assembled named-field aggregate, similar to
//!   `Map<String, Box<dyn Reflect>>`, for values whose shape is only known at
//!   runtime.
//! - [`ReflectKind`] / [`ReflectRef`]: the kind enumeration used to dispatch
//!   traversal; everything that is not a struct is [`Opaque`] and cannot be
//!   descended into.
//!
//! [`Reflect`]: crate::Reflect
//! [`Opaque`]: ReflectKind::Opaque

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectKind, ReflectRef};
pub use struct_ops::{DynamicStruct, Struct, StructFieldIter};
