//! Proc macros for classbound: `classes!` class-value literals and `variants!`
//! variant-map literals.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature on `classbound`.

use proc_macro::TokenStream;

mod classes_macro;
mod variants_macro;

/// Class-value literal macro.
///
/// Builds a `classbound::ClassValue` list from comma-separated items.
///
/// # Syntax
///
/// - `expr`: any value convertible into a `ClassValue` (strings, lists, options)
/// - `expr => cond`: the class name `expr` applied only when `cond` is true
///
/// # Example
///
/// ```ignore
/// let active = true;
/// let class = classes!["btn", extra, "btn--active" => active];
/// ```
#[proc_macro]
pub fn classes(input: TokenStream) -> TokenStream {
    classes_macro::classes_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Variant-map literal macro.
///
/// Builds a `classbound::VariantMap` from `name: class` entries, keeping
/// declaration order. Names are identifiers or string literals and must be
/// unique.
///
/// # Example
///
/// ```ignore
/// let variants = variants! {
///     active: "card--active",
///     "size-lg": ["card--lg", "p-8"],
/// };
/// ```
#[proc_macro]
pub fn variants(input: TokenStream) -> TokenStream {
    variants_macro::variants_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
