//! Props splitting: separate variant flags from props forwarded to the element.

use super::bag::Props;
use crate::variant::VariantMap;

/// The two halves of a split props bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitProps {
    /// Props forwarded to the element, in their original order.
    pub component_props: Props,
    /// Props whose keys name a variant.
    pub variant_props: Props,
}

/// Split `props` into variant flags and element props.
///
/// Every key of `variants` that is set in `props` moves to `variant_props`,
/// whatever its value. All other entries stay in `component_props` untouched.
/// Variants missing from `props` are simply absent from `variant_props`.
pub fn split_props(props: Props, variants: &VariantMap) -> SplitProps {
    let mut split = SplitProps::default();
    if variants.is_empty() {
        split.component_props = props;
        return split;
    }
    for (key, value) in props {
        if variants.contains_key(&key) {
            split.variant_props.insert(key, value);
        } else {
            split.component_props.insert(key, value);
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PropValue;
    use pretty_assertions::assert_eq;

    fn variants() -> VariantMap {
        VariantMap::from([("active", "is-active"), ("large", "is-large")])
    }

    #[test]
    fn moves_variant_keys() {
        let props = Props::new()
            .with("id", "x")
            .with("active", true)
            .with("title", "hi");
        let split = split_props(props, &variants());
        assert_eq!(split.component_props, Props::new().with("id", "x").with("title", "hi"));
        assert_eq!(split.variant_props, Props::new().with("active", true));
    }

    #[test]
    fn falsy_variant_values_still_move() {
        let props = Props::new().with("active", false).with("large", PropValue::Null);
        let split = split_props(props, &variants());
        assert!(split.component_props.is_empty());
        assert_eq!(split.variant_props.len(), 2);
    }

    #[test]
    fn empty_variant_map_passes_everything_through() {
        let props = Props::new().with("active", true).with("id", "x");
        let split = split_props(props.clone(), &VariantMap::new());
        assert_eq!(split.component_props, props);
        assert!(split.variant_props.is_empty());
    }

    #[test]
    fn missing_variant_keys_are_absent() {
        let split = split_props(Props::new().with("large", true), &variants());
        assert!(!split.variant_props.contains_key("active"));
        assert!(split.variant_props.is_truthy("large"));
    }

    #[test]
    fn component_props_are_input_minus_variant_keys() {
        let props = Props::new()
            .with("a", 1)
            .with("active", true)
            .with("b", "two")
            .with("large", 0)
            .with("c", PropValue::Null);
        let split = split_props(props.clone(), &variants());
        let expected: Props = props
            .into_iter()
            .filter(|(k, _)| k != "active" && k != "large")
            .collect();
        assert_eq!(split.component_props, expected);
    }

    #[test]
    fn large_bags_split_in_order() {
        let n = 20_000;
        let variants: VariantMap = (0..n / 2).map(|i| (format!("v{i}"), format!("class-{i}"))).collect();
        let props: Props = (0..n)
            .map(|i| {
                let key = if i % 2 == 0 { format!("v{}", i / 2) } else { format!("p{i}") };
                (key, i % 3 == 0)
            })
            .collect();

        let split = split_props(props, &variants);
        assert_eq!(split.variant_props.len(), n / 2);
        assert_eq!(split.component_props.len(), n / 2);
        assert_eq!(split.variant_props.keys().nth(1), Some("v1"));
        assert_eq!(split.component_props.keys().last(), Some(format!("p{}", n - 1).as_str()));
    }
}
