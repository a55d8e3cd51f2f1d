use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    spanned::Spanned,
    token::Comma,
    Data, DeriveInput, Error, Expr, Fields, Ident, LitStr, Result, Token, Type,
};

struct ParsedProp {
    key: LitStr,
    value: Expr,
}

impl Parse for ParsedProp {
    /// Parses a single prop of the form `my_prop: expr` or `"my-prop": expr`.
    fn parse(input: ParseStream) -> Result<Self> {
        let key = if input.peek(LitStr) {
            input.parse::<LitStr>()?
        } else {
            // Accept keywords too, so that `type: "button"` works.
            let ident = input.call(Ident::parse_any)?;
            LitStr::new(&ident.unraw().to_string(), ident.span())
        };
        input.parse::<Token![:]>()?;
        let value = input.parse()?;
        Ok(Self { key, value })
    }
}

struct ParsedProps {
    props: Punctuated<ParsedProp, Comma>,
}

impl Parse for ParsedProps {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            props: Punctuated::parse_terminated(input)?,
        })
    }
}

impl ToTokens for ParsedProps {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let len = self.props.len();
        let inserts = self.props.iter().map(|ParsedProp { key, value }| {
            quote!(_wrapcraft_props.insert(#key, ::wrapcraft::PropValue::from(#value));)
        });

        tokens.extend(quote! {
            {
                let mut _wrapcraft_props = ::wrapcraft::Props::with_capacity(#len);
                #(#inserts)*
                _wrapcraft_props
            }
        });
    }
}

/// Builds a `Props` bag, keeping the order the props are written in.
///
/// ```
/// # use wrapcraft::prelude::*;
/// let props = props!(id: 1, "aria-label": "close", r#type: "button");
/// assert_eq!(props.keys().collect::<Vec<_>>(), ["id", "aria-label", "type"]);
/// ```
#[proc_macro]
pub fn props(input: TokenStream) -> TokenStream {
    let props = parse_macro_input!(input as ParsedProps);
    quote!(#props).into()
}

struct ParsedField {
    ident: Ident,
    ty: Type,
    key: String,
}

struct ParsedIntoProps {
    def: DeriveInput,
    fields: Vec<ParsedField>,
}

impl Parse for ParsedIntoProps {
    fn parse(input: ParseStream) -> Result<Self> {
        let def: DeriveInput = input.parse()?;
        let fields = match &def.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => fields.named.iter().collect(),
                Fields::Unit => Vec::new(),
                Fields::Unnamed(fields) => {
                    return Err(Error::new(
                        fields.span(),
                        "IntoProps can only be derived for structs with named fields",
                    ))
                }
            },
            _ => {
                return Err(Error::new(
                    def.ident.span(),
                    "IntoProps can only be derived for structs",
                ))
            }
        };

        let mut parsed = Vec::with_capacity(fields.len());
        for field in fields {
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let mut key = ident.unraw().to_string();
            let mut skip = false;
            for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("prop")) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        skip = true;
                        Ok(())
                    } else if meta.path.is_ident("rename") {
                        key = meta.value()?.parse::<LitStr>()?.value();
                        Ok(())
                    } else {
                        Err(meta.error("expected `skip` or `rename = \"...\"`"))
                    }
                })?;
            }
            if !skip {
                parsed.push(ParsedField {
                    ident,
                    ty: field.ty.clone(),
                    key,
                });
            }
        }

        Ok(Self {
            def,
            fields: parsed,
        })
    }
}

impl ToTokens for ParsedIntoProps {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let name = &self.def.ident;
        let (impl_generics, ty_generics, where_clause) = self.def.generics.split_for_impl();

        let mut predicates = where_clause
            .map(|clause| clause.predicates.iter().map(|p| quote!(#p)).collect::<Vec<_>>())
            .unwrap_or_default();
        predicates.extend(self.fields.iter().map(|ParsedField { ty, .. }| {
            quote!(#ty: ::core::convert::Into<::wrapcraft::PropValue>)
        }));

        let len = self.fields.len();
        let inserts = self.fields.iter().map(|ParsedField { ident, key, .. }| {
            quote! {
                props.insert(
                    #key,
                    ::core::convert::Into::<::wrapcraft::PropValue>::into(value.#ident),
                );
            }
        });

        tokens.extend(quote! {
            impl #impl_generics ::core::convert::From<#name #ty_generics> for ::wrapcraft::Props
            where
                #(#predicates,)*
            {
                #[allow(unused_variables)]
                fn from(value: #name #ty_generics) -> Self {
                    let mut props = ::wrapcraft::Props::with_capacity(#len);
                    #(#inserts)*
                    props
                }
            }
        });
    }
}

/// Implements `From<T> for Props`, with one prop per field in declaration order.
///
/// Use `#[prop(rename = "...")]` to change a prop's key and `#[prop(skip)]` to leave a field
/// out.
#[proc_macro_derive(IntoProps, attributes(prop))]
pub fn derive_into_props(item: TokenStream) -> TokenStream {
    let props = parse_macro_input!(item as ParsedIntoProps);
    quote!(#props).into()
}
