//! `VariantMap`: an insertion-ordered map from variant name to class value.

use indexmap::IndexMap;

use crate::class::{merge, ClassValue};

/// Variant names mapped to the class value applied while the variant is active.
///
/// Names are unique and iteration follows insertion order. Equality compares
/// order too, since order decides the order of resolved classes.
#[derive(Debug, Clone, Default)]
pub struct VariantMap {
    entries: IndexMap<String, ClassValue>,
}

impl VariantMap {
    /// Create an empty variant map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variant (builder).
    pub fn with(mut self, name: impl Into<String>, class: impl Into<ClassValue>) -> Self {
        self.insert(name, class);
        self
    }

    /// Add or replace a variant. A replaced variant keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, class: impl Into<ClassValue>) {
        self.entries.insert(name.into(), class.into());
    }

    /// The class value of a variant.
    pub fn get(&self, name: &str) -> Option<&ClassValue> {
        self.entries.get(name)
    }

    /// Whether `name` is a variant of this map.
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over `(name, class)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassValue)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Variant names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combine two variant maps.
    ///
    /// The result holds the union of both key sets, `self`'s keys first. A variant
    /// present in both keeps both class values, merged with [`merge`], so later
    /// variants augment rather than replace same-named earlier ones.
    pub fn merge(&self, other: &VariantMap) -> VariantMap {
        let mut merged = self.clone();
        for (name, class) in &other.entries {
            match merged.entries.get_mut(name) {
                Some(slot) => *slot = merge(std::mem::take(slot), class.clone()),
                None => {
                    merged.entries.insert(name.clone(), class.clone());
                }
            }
        }
        merged
    }

    /// Shallow overlay: `other`'s variants replace same-named variants of `self`.
    pub fn overlay(&self, other: &VariantMap) -> VariantMap {
        let mut overlaid = self.clone();
        overlaid
            .entries
            .extend(other.entries.iter().map(|(n, c)| (n.clone(), c.clone())));
        overlaid
    }
}

impl PartialEq for VariantMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for VariantMap {}

impl<K: Into<String>, V: Into<ClassValue>> FromIterator<(K, V)> for VariantMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = VariantMap::new();
        for (name, class) in iter {
            map.insert(name, class);
        }
        map
    }
}

impl<K: Into<String>, V: Into<ClassValue>, const N: usize> From<[(K, V); N]> for VariantMap {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
