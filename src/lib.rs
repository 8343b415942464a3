#![doc = include_str!("../README.md")]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits paths rooted at `kvc`. This alias lets the generated
// code (and doc tests) resolve inside the crate itself.
extern crate self as kvc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use access::KeyValueAccess;
pub use kvc_derive as derive;
pub use reflection::Reflect;
