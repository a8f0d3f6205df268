//! Variants: named, flag-controlled class contributions.

pub mod map;
pub mod resolve;

pub use map::VariantMap;
pub use resolve::resolve_variants;
