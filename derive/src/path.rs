//! This independent module is used to provide the required paths,
//! so as to minimize changes when the `kvc` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `kvc` crate.
///
/// `kvc` declares `extern crate self as kvc;`, so this path resolves both for
/// dependents and inside the reflection crate itself.
pub(crate) fn kvc() -> syn::Path {
    syn::parse_quote!(kvc)
}

// -----------------------------------------------------------------------------
// Item Paths

#[inline(always)]
pub(crate) fn reflect_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::Reflect)
}

#[inline(always)]
pub(crate) fn typed_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::info::Typed)
}

#[inline(always)]
pub(crate) fn type_info_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::info::TypeInfo)
}

#[inline(always)]
pub(crate) fn struct_info_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::info::StructInfo)
}

#[inline(always)]
pub(crate) fn named_field_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::info::NamedField)
}

#[inline(always)]
pub(crate) fn opaque_info_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::info::OpaqueInfo)
}

#[inline(always)]
pub(crate) fn struct_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::ops::Struct)
}

#[inline(always)]
pub(crate) fn struct_field_iter_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::ops::StructFieldIter)
}

#[inline(always)]
pub(crate) fn reflect_kind_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::ops::ReflectKind)
}

#[inline(always)]
pub(crate) fn reflect_ref_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::ops::ReflectRef)
}

#[inline(always)]
pub(crate) fn struct_debug_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::impls::struct_debug)
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::impls::NonGenericTypeInfoCell)
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(kvc_path: &syn::Path) -> TokenStream {
    quote!(#kvc_path::impls::GenericTypeInfoCell)
}
