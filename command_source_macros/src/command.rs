use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Data, DeriveInput, Field, Fields, Ident, LitStr, Path, Token, Type};

pub fn derive_command(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let vis = &input.vis;
    let fields = named_fields(input)?;

    let options = extract_options(input)?;
    let source_field = extract_source_field(fields)?;
    check_source_type(source_field)?;
    let source_field = source_field.ident.clone().ok_or_else(|| {
        syn::Error::new_spanned(source_field, "Command derive: unnamed source field")
    })?;
    let payload = options
        .payload
        .unwrap_or_else(|| format_ident!("{}Payload", name));

    // Everything but the provenance field moves across unchanged
    let carried: Vec<&Field> = fields
        .iter()
        .filter(|field| field.ident.as_ref() != Some(&source_field))
        .collect();

    let payload_fields = carried.iter().map(|field| {
        let docs = field.attrs.iter().filter(|attr| attr.path().is_ident("doc"));
        let field_vis = &field.vis;
        let ident = &field.ident;
        let ty = &field.ty;
        quote! {
            #(#docs)*
            #field_vis #ident: #ty
        }
    });

    let moves = carried.iter().map(|field| {
        let ident = &field.ident;
        quote! { #ident: unsourced.#ident }
    });

    let derives = if options.derives.is_empty() {
        quote! {}
    } else {
        let derives = &options.derives;
        quote! { #[derive(#(#derives),*)] }
    };

    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let doc = format!("[`{}`] without its `{}` field.", name, source_field);

    Ok(quote! {
        #[doc = #doc]
        #derives
        #vis struct #payload #generics #where_clause {
            #(#payload_fields,)*
        }

        impl #impl_generics ::command_source::Command for #name #ty_generics #where_clause {
            type Unsourced = #payload #ty_generics;

            fn stamp(unsourced: Self::Unsourced, source: &str) -> Self {
                Self {
                    #source_field: ::std::string::String::from(source),
                    #(#moves,)*
                }
            }

            fn source(&self) -> &str {
                &self.#source_field
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&Punctuated<Field, Token![,]>> {
    if let Data::Struct(data_struct) = &input.data {
        if let Fields::Named(fields) = &data_struct.fields {
            return Ok(&fields.named);
        }
    }

    Err(syn::Error::new_spanned(
        &input.ident,
        "Command derive: only structs with named fields are supported",
    ))
}

#[derive(Default)]
struct CommandOptions {
    payload: Option<Ident>,
    derives: Vec<Path>,
}

fn extract_options(input: &DeriveInput) -> syn::Result<CommandOptions> {
    let mut options = CommandOptions::default();

    for attr in &input.attrs {
        if !attr.path().is_ident("command") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("payload") {
                let value: LitStr = meta.value()?.parse()?;
                options.payload = Some(value.parse()?);
                Ok(())
            } else if meta.path.is_ident("derive") {
                meta.parse_nested_meta(|derive| {
                    options.derives.push(derive.path);
                    Ok(())
                })
            } else {
                Err(meta.error("expected `payload = \"...\"` or `derive(...)`"))
            }
        })?;
    }

    Ok(options)
}

fn extract_source_field(fields: &Punctuated<Field, Token![,]>) -> syn::Result<&Field> {
    for field in fields {
        for attr in &field.attrs {
            if !attr.path().is_ident("command") {
                continue;
            }

            let mut is_source = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("source") {
                    is_source = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `source`"))
                }
            })?;

            if is_source {
                return Ok(field);
            }
        }
    }

    // Default: look for a field named "source"
    fields
        .iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| ident == "source"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "Command derive: no field marked with #[command(source)] and no field named `source`",
            )
        })
}

// The stamped name is written with `String::from`, so nothing else fits
fn check_source_type(field: &Field) -> syn::Result<()> {
    let is_string = match &field.ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "String" && segment.arguments.is_none()),
        _ => false,
    };

    if is_string {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &field.ty,
            "Command derive: the source field must be a `String`",
        ))
    }
}
