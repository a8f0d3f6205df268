//! `Element`: a rendered intrinsic element.

use crate::class::class_tokens;
use crate::props::{PropValue, Props};

use super::runtime::CHILDREN_PROP;

/// A rendered intrinsic element: tag, optional class attribute and attributes.
///
/// Children, when present, live in the `children` attribute as
/// [`PropValue::Children`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    class: Option<String>,
    attrs: Props,
}

impl Element {
    /// Create an element with no class and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            attrs: Props::new(),
        }
    }

    /// Set the class attribute (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// Append a child element (builder).
    pub fn with_child(mut self, child: Element) -> Self {
        match self.attrs.remove(CHILDREN_PROP) {
            Some(PropValue::Children(mut children)) => {
                children.push(child);
                self.attrs.insert(CHILDREN_PROP, children);
            }
            _ => {
                self.attrs.insert(CHILDREN_PROP, vec![child]);
            }
        }
        self
    }

    pub(crate) fn from_parts(tag: impl Into<String>, class: Option<String>, attrs: Props) -> Self {
        Self {
            tag: tag.into(),
            class,
            attrs,
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The class attribute, if the element has one.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Individual class names of the class attribute.
    pub fn classes(&self) -> Vec<&str> {
        self.class.as_deref().map(class_tokens).unwrap_or_default()
    }

    /// Whether the class attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    /// All attributes except the class attribute.
    pub fn attrs(&self) -> &Props {
        &self.attrs
    }

    /// A single attribute.
    pub fn attr(&self, name: &str) -> Option<&PropValue> {
        self.attrs.get(name)
    }

    /// Child elements, or an empty slice.
    pub fn children(&self) -> &[Element] {
        self.attrs
            .get(CHILDREN_PROP)
            .and_then(PropValue::as_children)
            .unwrap_or_default()
    }
}
