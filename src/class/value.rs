//! `ClassValue`: an opaque, possibly nested set of class names.
//!
//! A class value is a string, a list of class values, or a conditional map of
//! class names to flags. `ClassValue::None` stands for an absent value. Truthiness
//! follows the host convention: `None` and the empty string are falsy, lists and
//! maps are always truthy (even when empty).

use std::fmt;

use super::join::class_names;

// ---------------------------------------------------------------------------
// ClassValue
// ---------------------------------------------------------------------------

/// A class-name value, flattened into a class string by [`class_names`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassValue {
    /// No class. Falsy.
    #[default]
    None,
    /// One or more space-separated class names. Falsy when empty.
    Str(String),
    /// Ordered, arbitrarily nested class values.
    List(Vec<ClassValue>),
    /// Class names that contribute only when their flag is set.
    Map(Vec<(String, bool)>),
}

impl ClassValue {
    /// Build a conditional map from `(name, flag)` pairs.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, bool)>) -> Self {
        ClassValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A single conditional class: contributes `name` when `active` is true.
    pub fn when(name: impl Into<String>, active: bool) -> Self {
        ClassValue::Map(vec![(name.into(), active)])
    }

    /// Whether this value counts as present when merging.
    pub fn is_truthy(&self) -> bool {
        match self {
            ClassValue::None => false,
            ClassValue::Str(s) => !s.is_empty(),
            ClassValue::List(_) | ClassValue::Map(_) => true,
        }
    }

    /// Merge `other` after `self`. See [`merge`].
    pub fn merge(self, other: impl Into<ClassValue>) -> ClassValue {
        merge(self, other.into())
    }
}

/// Binary class-value merge.
///
/// Both truthy: the ordered pair `[a, b]`. Otherwise whichever is truthy, and
/// `b` when neither is.
pub fn merge(a: ClassValue, b: ClassValue) -> ClassValue {
    if a.is_truthy() && b.is_truthy() {
        ClassValue::List(vec![a, b])
    } else if a.is_truthy() {
        a
    } else {
        b
    }
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&class_names([self]))
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Str(s.to_owned())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Str(s)
    }
}

impl From<&String> for ClassValue {
    fn from(s: &String) -> Self {
        ClassValue::Str(s.clone())
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::None, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(items: [T; N]) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>> FromIterator<T> for ClassValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ClassValue::List(iter.into_iter().map(Into::into).collect())
    }
}
