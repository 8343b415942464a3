//! Provide some utilities and built-in reflection implementations.
//!
//! - [`NonGenericTypeInfoCell`]: backs [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: backs [`Typed`] for generic types.
//! - [`struct_debug`]: the [`Reflect::reflect_debug`] implementation used by
//!   derived structs.
//!
//! ## Implemented leaf types
//!
//! - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - `bool`, `char`, `()`
//! - `&'static str`, `String`, `Cow<'static, str>`
//! - `core::time::Duration`
//! - `Vec<T>`, `Option<T>` (leaves: collections are not traversed by key path)
//!
//! [`Typed`]: crate::info::Typed
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod debug;
mod opaque;

mod alloc;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
pub use debug::struct_debug;

pub(crate) use opaque::impl_reflect_opaque;
