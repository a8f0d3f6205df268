//! classes! macro: parse class-value items and generate a `ClassValue` list.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Expr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// One item of a classes! invocation.
pub(crate) enum ClassItem {
    /// `expr`: converted with `ClassValue::from`.
    Value(Expr),
    /// `name => cond`: a conditional class.
    Conditional { name: Expr, cond: Expr },
}

impl std::fmt::Debug for ClassItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassItem::Value(expr) => f
                .debug_tuple("Value")
                .field(&quote!(#expr).to_string())
                .finish(),
            ClassItem::Conditional { name, cond } => f
                .debug_struct("Conditional")
                .field("name", &quote!(#name).to_string())
                .field("cond", &quote!(#cond).to_string())
                .finish(),
        }
    }
}

/// The top-level classes! input.
#[derive(Debug)]
struct ClassesInput {
    items: Vec<ClassItem>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for ClassItem {
    fn parse(input: ParseStream) -> Result<Self> {
        let expr: Expr = input.parse()?;
        if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;
            let cond: Expr = input.parse()?;
            return Ok(ClassItem::Conditional { name: expr, cond });
        }
        Ok(ClassItem::Value(expr))
    }
}

impl Parse for ClassesInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<ClassItem, Token![,]>::parse_terminated(input)?;
        Ok(ClassesInput {
            items: items.into_iter().collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

fn generate_item(item: &ClassItem) -> TokenStream {
    match item {
        ClassItem::Value(expr) => quote! {
            ::classbound::ClassValue::from(#expr)
        },
        ClassItem::Conditional { name, cond } => quote! {
            ::classbound::ClassValue::when(#name, #cond)
        },
    }
}

/// Entry point: generate code for the entire classes! macro.
pub(crate) fn classes_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: ClassesInput = syn::parse2(input)?;
    let items = parsed.items.iter().map(generate_item);
    Ok(quote! {
        ::classbound::ClassValue::List(::std::vec![#(#items),*])
    })
}

// ===========================================================================
// Tests
// ===========================================================================
