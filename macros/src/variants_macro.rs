//! variants! macro: parse `name: class` entries and generate a `VariantMap`.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Error, Expr, Ident, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A parsed variant entry: `name: class`.
pub(crate) struct VariantEntry {
    pub name: String,
    pub name_span: Span,
    pub class: Expr,
}

impl std::fmt::Debug for VariantEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = &self.class;
        f.debug_struct("VariantEntry")
            .field("name", &self.name)
            .field("class", &quote!(#class).to_string())
            .finish()
    }
}

/// The top-level variants! input.
#[derive(Debug)]
struct VariantsInput {
    entries: Vec<VariantEntry>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for VariantEntry {
    fn parse(input: ParseStream) -> Result<Self> {
        // Name: bare identifier (`active`) or string literal (`"size-lg"`).
        let (name, name_span) = if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            (lit.value(), lit.span())
        } else {
            let ident: Ident = input.parse()?;
            (ident.to_string(), ident.span())
        };

        if name.is_empty() {
            return Err(Error::new(name_span, "variant name must not be empty"));
        }

        input.parse::<Token![:]>()?;
        let class: Expr = input.parse()?;

        Ok(VariantEntry {
            name,
            name_span,
            class,
        })
    }
}

impl Parse for VariantsInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let parsed = Punctuated::<VariantEntry, Token![,]>::parse_terminated(input)?;
        let mut entries: Vec<VariantEntry> = Vec::new();
        for entry in parsed {
            if entries.iter().any(|e| e.name == entry.name) {
                return Err(Error::new(
                    entry.name_span,
                    format!("duplicate variant `{}`", entry.name),
                ));
            }
            entries.push(entry);
        }
        Ok(VariantsInput { entries })
    }
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

fn generate_entry(entry: &VariantEntry) -> TokenStream {
    let name = LitStr::new(&entry.name, entry.name_span);
    let class = &entry.class;
    quote! {
        .with(#name, ::classbound::ClassValue::from(#class))
    }
}

/// Entry point: generate code for the entire variants! macro.
pub(crate) fn variants_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: VariantsInput = syn::parse2(input)?;
    let calls = parsed.entries.iter().map(generate_entry);
    Ok(quote! {
        ::classbound::VariantMap::new() #(#calls)*
    })
}

// ===========================================================================
// Tests
// ===========================================================================
