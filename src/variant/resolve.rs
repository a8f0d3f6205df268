//! Variant resolution: pick the class values of active variants.

use super::map::VariantMap;
use crate::class::ClassValue;
use crate::props::Props;

/// Class values of every variant whose flag is truthy in `variant_props`,
/// in the variant map's order.
pub fn resolve_variants(variants: &VariantMap, variant_props: &Props) -> Vec<ClassValue> {
    variants
        .iter()
        .filter(|(name, _)| variant_props.is_truthy(name))
        .map(|(_, class)| class.clone())
        .collect()
}
