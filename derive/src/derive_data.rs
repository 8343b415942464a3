//! Provide some tools for parsing token stream.

use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, parse_quote};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// ReflectDerive

/// The parsed shape of a `#[derive(Reflect)]` input.
pub(crate) enum ReflectDerive<'a> {
    /// A struct with named fields, including `struct T {}`.
    Struct(ReflectStruct<'a>),
    /// A unit struct (`struct T;`), treated as `Opaque`.
    UnitStruct(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub(crate) fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let meta = ReflectMeta::new(&ast.ident, &ast.generics);

        match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => {
                    let fields = fields
                        .named
                        .iter()
                        .map(StructField::parse)
                        .collect::<syn::Result<Vec<_>>>()?;

                    Ok(Self::Struct(ReflectStruct { meta, fields }))
                }
                Fields::Unit => Ok(Self::UnitStruct(meta)),
                Fields::Unnamed(fields) => Err(syn::Error::new_spanned(
                    fields,
                    "tuple structs are not supported, key-value coding requires named fields",
                )),
            },
            Data::Enum(data) => Err(syn::Error::new_spanned(
                &data.enum_token,
                "enums are not supported, key-value coding requires named fields",
            )),
            Data::Union(data) => Err(syn::Error::new_spanned(
                &data.union_token,
                "unions are not supported, key-value coding requires named fields",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMeta

/// Type-level information shared by every derive shape.
pub(crate) struct ReflectMeta<'a> {
    ident: &'a Ident,
    /// The input generics with a `Reflect` bound added to each type parameter.
    generics: Generics,
}

impl<'a> ReflectMeta<'a> {
    pub(crate) fn new(ident: &'a Ident, generics: &Generics) -> Self {
        let kvc_path = crate::path::kvc();

        let mut generics = generics.clone();
        for param in generics.type_params_mut() {
            param.bounds.push(parse_quote!(#kvc_path::Reflect));
        }

        Self { ident, generics }
    }

    pub(crate) fn ident(&self) -> &Ident {
        self.ident
    }

    /// Whether the `Typed` impl must key its info cell by concrete type.
    ///
    /// A `static` inside a generic impl is shared across monomorphizations,
    /// so generic types cannot use the plain one-slot cell.
    pub(crate) fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
            || self.generics.const_params().next().is_some()
    }

    pub(crate) fn split_generics(
        &self,
    ) -> (
        syn::ImplGenerics<'_>,
        syn::TypeGenerics<'_>,
        Option<&syn::WhereClause>,
    ) {
        self.generics.split_for_impl()
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// Parsed information for a struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub(crate) fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Returns the fields visible to reflection, in declaration order.
    pub(crate) fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.ignored)
    }
}

/// A single named field and its parsed attributes.
pub(crate) struct StructField<'a> {
    pub(crate) ident: &'a Ident,
    pub(crate) ty: &'a Type,
    ignored: bool,
}

impl<'a> StructField<'a> {
    fn parse(field: &'a syn::Field) -> syn::Result<Self> {
        let mut ignored = false;

        for attr in &field.attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    ignored = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute, expected `ignore`"))
                }
            })?;
        }

        let ident = field
            .ident
            .as_ref()
            .expect("named struct should not have unnamed fields");

        Ok(Self {
            ident,
            ty: &field.ty,
            ignored,
        })
    }
}
