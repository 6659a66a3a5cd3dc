use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Field, Fields, Index, Member, Type};

use crate::attr::{container_attr, field_attr, FieldAttr};

pub fn derive_conform(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Conform can only be derived for structs",
            ))
        }
    };
    let container = container_attr(&input.attrs)?;

    let mut visits = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let member = member(field, index);
        match field_attr(&field.attrs)? {
            FieldAttr::Skip => {}
            FieldAttr::Plain => visits.push(quote! {
                ::conform::ConformField::conform_field(
                    &mut self.#member,
                    ::core::option::Option::None,
                    registry,
                );
            }),
            FieldAttr::Directives(annotation) => visits.push(quote! {
                {
                    static CHAIN: ::conform::__private::Lazy<::conform::Chain> =
                        ::conform::__private::Lazy::new(|| ::conform::Chain::parse(#annotation));
                    ::conform::ConformField::conform_field(
                        &mut self.#member,
                        ::core::option::Option::Some(&*CHAIN),
                        registry,
                    );
                }
            }),
        }
    }
    if visits.is_empty() {
        visits.push(quote! { let _ = registry; });
    }

    let field_methods = if container.wrapped {
        let inner = wrapped_member(fields, input)?;
        quote! {
            fn conform_field(
                &mut self,
                chain: ::core::option::Option<&::conform::Chain>,
                registry: &::conform::Registry,
            ) {
                match chain {
                    ::core::option::Option::Some(chain) => ::conform::ConformField::conform_field(
                        &mut self.#inner,
                        ::core::option::Option::Some(chain),
                        registry,
                    ),
                    ::core::option::Option::None => ::conform::Conform::conform(self, registry),
                }
            }

            fn conform_element(
                &mut self,
                _chain: ::core::option::Option<&::conform::Chain>,
                registry: &::conform::Registry,
            ) {
                ::conform::Conform::conform(self, registry);
            }
        }
    } else {
        quote! {
            fn conform_field(
                &mut self,
                _chain: ::core::option::Option<&::conform::Chain>,
                registry: &::conform::Registry,
            ) {
                ::conform::Conform::conform(self, registry);
            }
        }
    };

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::conform::ConformField));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::conform::Conform for #ident #ty_generics #where_clause {
            fn conform(&mut self, registry: &::conform::Registry) {
                #(#visits)*
            }
        }

        impl #impl_generics ::conform::ConformField for #ident #ty_generics #where_clause {
            #field_methods

            fn conform_nested(&mut self, registry: &::conform::Registry) {
                ::conform::Conform::conform(self, registry);
            }
        }
    })
}

fn member(field: &Field, index: usize) -> Member {
    match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(index)),
    }
}

/// The single `String` field of a wrapped scalar.
fn wrapped_member(fields: &Fields, input: &DeriveInput) -> syn::Result<Member> {
    let mut strings = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| is_string(&field.ty));
    match (strings.next(), strings.next()) {
        (Some((index, field)), None) => Ok(member(field, index)),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "`#[conform(wrapped)]` requires exactly one `String` field",
        )),
    }
}

fn is_string(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "String" && segment.arguments.is_none()),
        _ => false,
    }
}
