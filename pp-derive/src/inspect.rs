//! Implementation of #[derive(Inspect)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DataEnum, DeriveInput, Field, Fields, Generics, Ident, LitStr, Visibility,
    parse_macro_input, parse_quote,
};

pub fn derive_inspect_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let display = parse_type_attrs(&input.attrs)?;

    let body = if display {
        quote! {
            fn shape(&self) -> ::pp::Shape<'_> {
                ::pp::Shape::Str(::std::borrow::Cow::Owned(::std::string::ToString::to_string(self)))
            }

            fn pretty_print(&self) -> ::std::option::Option<::std::string::String> {
                ::std::option::Option::Some(::std::string::ToString::to_string(self))
            }
        }
    } else {
        let shape = match &input.data {
            Data::Struct(data) => struct_shape(name, &data.fields)?,
            Data::Enum(data) => enum_shape(name, data)?,
            Data::Union(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Inspect cannot be derived for unions; implement it by hand",
                ));
            }
        };
        quote! {
            fn shape(&self) -> ::pp::Shape<'_> {
                #shape
            }
        }
    };

    let generics = add_bounds(input.generics.clone(), display);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::pp::Inspect for #name #ty_generics #where_clause {
            #body
        }
    })
}

/// Every type parameter must itself be inspectable, unless the type renders
/// through `Display`.
fn add_bounds(mut generics: Generics, display: bool) -> Generics {
    if !display {
        for param in generics.type_params_mut() {
            param.bounds.push(parse_quote!(::pp::Inspect));
        }
    }
    generics
}

/// Parses `#[inspect(display)]` on the type.
fn parse_type_attrs(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut display = false;
    for attr in attrs {
        if !attr.path().is_ident("inspect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("display") {
                display = true;
                Ok(())
            } else {
                Err(meta.error("unsupported inspect attribute on a type, expected `display`"))
            }
        })?;
    }
    Ok(display)
}

struct FieldAttrs {
    skip: bool,
    rename: Option<String>,
}

/// Parses `#[inspect(skip)]` and `#[inspect(rename = "...")]` on a field.
fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs {
        skip: false,
        rename: None,
    };
    for attr in attrs {
        if !attr.path().is_ident("inspect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(name.value());
                Ok(())
            } else {
                Err(meta.error("unsupported inspect attribute on a field, expected `skip` or `rename`"))
            }
        })?;
    }
    Ok(parsed)
}

fn member_name(field: &Field, index: usize, attrs: &FieldAttrs) -> String {
    if let Some(rename) = &attrs.rename {
        return rename.clone();
    }
    match &field.ident {
        Some(ident) => ident.to_string().trim_start_matches("r#").to_string(),
        None => index.to_string(),
    }
}

fn struct_shape(name: &Ident, fields: &Fields) -> syn::Result<TokenStream2> {
    let label = name.to_string();
    let mut members = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let attrs = parse_field_attrs(&field.attrs)?;
        let member = member_name(field, index, &attrs);
        // Only `pub` fields are shown; everything else is elided.
        let hidden = attrs.skip || !matches!(field.vis, Visibility::Public(_));
        if hidden {
            members.push(quote!(.hidden(#member)));
            continue;
        }
        let access = match &field.ident {
            Some(ident) => quote!(#ident),
            None => {
                let index = syn::Index::from(index);
                quote!(#index)
            }
        };
        members.push(quote!(.field(#member, &self.#access)));
    }
    Ok(quote! {
        ::pp::Record::new(#label) #(#members)* .into()
    })
}

fn enum_shape(name: &Ident, data: &DataEnum) -> syn::Result<TokenStream2> {
    if data.variants.is_empty() {
        return Ok(quote!(match *self {}));
    }

    let mut arms = Vec::new();
    for variant in &data.variants {
        let ident = &variant.ident;
        let label = format!("{}::{}", name, ident);
        let mut members = Vec::new();
        let arm = match &variant.fields {
            Fields::Named(fields) => {
                let mut bindings = Vec::new();
                for (index, field) in fields.named.iter().enumerate() {
                    let attrs = parse_field_attrs(&field.attrs)?;
                    let member = member_name(field, index, &attrs);
                    if attrs.skip {
                        members.push(quote!(.hidden(#member)));
                        continue;
                    }
                    let binding = &field.ident;
                    bindings.push(quote!(#binding));
                    members.push(quote!(.field(#member, #binding)));
                }
                quote! {
                    Self::#ident { #(#bindings,)* .. } => ::pp::Record::new(#label) #(#members)* .into(),
                }
            }
            Fields::Unnamed(fields) => {
                let mut patterns = Vec::new();
                for (index, field) in fields.unnamed.iter().enumerate() {
                    let attrs = parse_field_attrs(&field.attrs)?;
                    let member = member_name(field, index, &attrs);
                    if attrs.skip {
                        patterns.push(quote!(_));
                        members.push(quote!(.hidden(#member)));
                        continue;
                    }
                    let binding = format_ident!("__field{}", index);
                    patterns.push(quote!(#binding));
                    members.push(quote!(.field(#member, #binding)));
                }
                quote! {
                    Self::#ident(#(#patterns),*) => ::pp::Record::new(#label) #(#members)* .into(),
                }
            }
            Fields::Unit => quote! {
                Self::#ident => ::pp::Record::new(#label).into(),
            },
        };
        arms.push(arm);
    }

    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}
