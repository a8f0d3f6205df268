//! `PropValue`: a single property value with host-style truthiness.

use crate::class::ClassValue;
use crate::render::Element;

/// A property value passed to a component or element.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Explicitly empty.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A structured class value, typically for the class prop.
    Class(ClassValue),
    /// Child elements.
    Children(Vec<Element>),
}

impl PropValue {
    /// Whether this value enables a variant flag.
    ///
    /// `Null`, `false`, zero, NaN and the empty string are falsy. Children are
    /// always truthy, class values follow [`ClassValue::is_truthy`].
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Int(n) => *n != 0,
            PropValue::Float(f) => *f != 0.0 && !f.is_nan(),
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Class(c) => c.is_truthy(),
            PropValue::Children(_) => true,
        }
    }

    /// Interpret this value as a class value.
    ///
    /// Strings and class values map directly; non-zero numbers become their
    /// decimal text. Everything else contributes no class.
    pub fn into_class_value(self) -> ClassValue {
        match self {
            PropValue::Str(s) => ClassValue::Str(s),
            PropValue::Class(c) => c,
            PropValue::Int(n) if n != 0 => ClassValue::Str(n.to_string()),
            PropValue::Float(f) if f != 0.0 && !f.is_nan() => ClassValue::Str(f.to_string()),
            _ => ClassValue::None,
        }
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The child elements, if this holds children.
    pub fn as_children(&self) -> Option<&[Element]> {
        match self {
            PropValue::Children(children) => Some(children),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Int(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Int(n.into())
    }
}

impl From<f64> for PropValue {
    fn from(f: f64) -> Self {
        PropValue::Float(f)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<ClassValue> for PropValue {
    fn from(c: ClassValue) -> Self {
        PropValue::Class(c)
    }
}

impl From<Vec<Element>> for PropValue {
    fn from(children: Vec<Element>) -> Self {
        PropValue::Children(children)
    }
}

impl From<Element> for PropValue {
    fn from(child: Element) -> Self {
        PropValue::Children(vec![child])
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropValue::Null, Into::into)
    }
}
