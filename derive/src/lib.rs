//! Derive support for the `kvc` key-value coding crate.
//!
//! See the [`Reflect`](macro@Reflect) derive macro.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` automatically implements the following traits:
///
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }`)
///
/// Note: Unit structs (`struct T;`) have no fields to look up and are treated
/// as `Opaque` rather than as `Struct`.
///
/// Tuple structs and enums are not supported: key-value coding addresses
/// fields by name, and those types have none.
///
/// ## Example
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
/// ```
///
/// Every field type must implement `Reflect` itself. For generic structs, a
/// `Reflect` bound is added to each type parameter.
///
/// ## ignore
///
/// The `ignore` attribute causes the reflection system to **completely**
/// ignore a field, as if it doesn't exist:
///
/// - The field will not be included in type information.
/// - `field_len` will be reduced, and field indices are renumbered.
/// - Key-value coding will report the field as absent.
///
/// Ignored field types do not need to implement `Reflect`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Cached {
///     value: u64,
///     #[reflect(ignore)]
///     dirty: bool,
/// }
/// ```
///
/// This attribute can only be used on fields.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    // Parse type kind, attribute and fields infomation.
    let reflect_derive = match derive_data::ReflectDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls: proc_macro2::TokenStream = match reflect_derive {
        derive_data::ReflectDerive::Struct(info) => impls::impl_struct(&info),
        derive_data::ReflectDerive::UnitStruct(meta) => impls::impl_unit(&meta),
    };

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
