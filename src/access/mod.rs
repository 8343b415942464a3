//! Key parsing and traversal for key-value coding.
//!
//! A *key path* is a `.`-delimited string of field names, resolved left to
//! right from a root value: every non-terminal segment must name a field
//! holding another struct, and the terminal segment names the field to
//! return. There are three complementary APIs exposed here:
//!
//! - [`KeyValueAccess`]: the lookup surface. All four operations return
//!   `Option`; a missing field, a descent into a non-struct value, and a
//!   requested-type mismatch are the same "absent" outcome.
//! - [`KeyPath`]: a parsed, reusable path for repeated queries. Its `resolve`
//!   methods keep the underlying error ([`KeyPathError`]) for callers that
//!   want to know *why* a lookup failed.
//! - [`Key`]: a single path segment, the building block of both.
//!
//! # Examples
//!
//! `KeyValueAccess`:
//!
//! ```
//! use kvc::{KeyValueAccess, derive::Reflect};
//!
//! #[derive(Reflect)]
//! struct Engine { power: u32 }
//!
//! #[derive(Reflect)]
//! struct Car { engine: Engine }
//!
//! let car = Car { engine: Engine { power: 120 } };
//!
//! assert_eq!(car.value_at_path_as::<u32>("engine.power"), Some(&120));
//! assert_eq!(car.value_at_path_as::<u32>("engine.wheels"), None);
//! ```
//!
//! `KeyPath`:
//!
//! ```
//! use kvc::{access::KeyPath, derive::Reflect};
//!
//! #[derive(Reflect)]
//! struct Engine { power: u32 }
//!
//! #[derive(Reflect)]
//! struct Car { engine: Engine }
//!
//! let path = KeyPath::parse("engine.power");
//! let car = Car { engine: Engine { power: 120 } };
//!
//! // parse once, resolve many times
//! assert_eq!(path.resolve_as::<u32>(&car).ok(), Some(&120));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod key;
mod key_path;
mod key_value;

// -----------------------------------------------------------------------------
// Exports

pub use key::{AccessError, AccessErrorKind, Key};
pub use key_path::{KeyPath, KeyPathError};
pub use key_value::KeyValueAccess;
