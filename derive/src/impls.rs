//! Code generation for each derive shape.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectMeta, ReflectStruct};

// -----------------------------------------------------------------------------
// Struct Kind

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let kvc_path = crate::path::kvc();

    let type_info_ = crate::path::type_info_(&kvc_path);
    let struct_info_ = crate::path::struct_info_(&kvc_path);
    let named_field_ = crate::path::named_field_(&kvc_path);

    let field_infos = info.active_fields().map(|field| {
        let name = field.ident.to_string();
        let ty = field.ty;
        quote!(#named_field_::new::<#ty>(#name))
    });

    let info_tokens = quote! {
        #type_info_::Struct(#struct_info_::new::<Self>(&[
            #(#field_infos),*
        ]))
    };

    let typed_trait_tokens = impl_trait_typed(meta, info_tokens);
    let struct_trait_tokens = impl_trait_struct(info);
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Struct), get_struct_debug_impl());

    quote! {
        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let kvc_path = crate::path::kvc();

    let struct_ = crate::path::struct_(&kvc_path);
    let reflect_ = crate::path::reflect_(&kvc_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(&kvc_path);

    let field_names = info
        .active_fields()
        .map(|field| field.ident.to_string())
        .collect::<Vec<String>>();
    let field_idents = info
        .active_fields()
        .map(|field| field.ident)
        .collect::<Vec<_>>();
    let field_indices = (0..field_idents.len()).collect::<Vec<usize>>();
    let field_count = field_idents.len();

    let real_ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#field_names => ::core::option::Option::Some(&self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(#field_names),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens for structs.
fn get_struct_debug_impl() -> TokenStream {
    let kvc_path = crate::path::kvc();
    let struct_debug_ = crate::path::struct_debug_(&kvc_path);

    quote! {
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            #struct_debug_(self, f)
        }
    }
}

// -----------------------------------------------------------------------------
// Unit Kind

/// Implement full reflect for unit type.
///
/// Unit structs have no fields to look up, so they are `Opaque`.
pub(crate) fn impl_unit(meta: &ReflectMeta) -> TokenStream {
    let kvc_path = crate::path::kvc();

    let type_info_ = crate::path::type_info_(&kvc_path);
    let opaque_info_ = crate::path::opaque_info_(&kvc_path);

    let info_tokens = quote! {
        #type_info_::Opaque(#opaque_info_::new::<Self>())
    };

    let ident_name = meta.ident().to_string();
    let debug_tokens = quote! {
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Formatter::write_str(f, #ident_name)
        }
    };

    let typed_trait_tokens = impl_trait_typed(meta, info_tokens);
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Opaque), debug_tokens);

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens
    }
}

// -----------------------------------------------------------------------------
// Common Traits

/// Generate implementation code for `Typed`.
fn impl_trait_typed(meta: &ReflectMeta, type_info_tokens: TokenStream) -> TokenStream {
    let kvc_path = crate::path::kvc();
    let trait_typed_ = crate::path::typed_(&kvc_path);
    let type_info_ = crate::path::type_info_(&kvc_path);

    let inner_cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(&kvc_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self, _>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(&kvc_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let real_ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #trait_typed_ for #real_ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}

/// Generate implementation code for `Reflect`.
///
/// `kind` is the variant name shared by `ReflectKind` and `ReflectRef`.
fn impl_trait_reflect(
    meta: &ReflectMeta,
    kind: TokenStream,
    reflect_debug_tokens: TokenStream,
) -> TokenStream {
    let kvc_path = crate::path::kvc();
    let reflect_ = crate::path::reflect_(&kvc_path);
    let typed_ = crate::path::typed_(&kvc_path);
    let type_info_ = crate::path::type_info_(&kvc_path);
    let reflect_kind_ = crate::path::reflect_kind_(&kvc_path);
    let reflect_ref_ = crate::path::reflect_ref_(&kvc_path);

    let real_ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_type_info(&self) -> &'static #type_info_ {
                <Self as #typed_>::type_info()
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #reflect_debug_tokens
        }
    }
}
