//! `ElementType`: what a bound component renders into.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::runtime::Component;

/// Tag rendered when no element type is given.
pub const DEFAULT_ELEMENT: &str = "div";

/// The underlying renderable unit of a bound component.
#[derive(Clone)]
pub enum ElementType {
    /// An intrinsic tag such as `"div"` or `"button"`.
    Intrinsic(Cow<'static, str>),
    /// Another component, rendered with the forwarded props.
    Component(Arc<dyn Component>),
}

impl ElementType {
    /// Wrap a component.
    pub fn component(component: impl Component + 'static) -> Self {
        ElementType::Component(Arc::new(component))
    }

    /// The tag name, for intrinsic element types.
    pub fn tag(&self) -> Option<&str> {
        match self {
            ElementType::Intrinsic(tag) => Some(tag),
            ElementType::Component(_) => None,
        }
    }

    /// A human-readable label: the tag, or the component's display name.
    pub fn label(&self) -> &str {
        match self {
            ElementType::Intrinsic(tag) => tag,
            ElementType::Component(c) => c.display_name().unwrap_or("Component"),
        }
    }
}

impl Default for ElementType {
    fn default() -> Self {
        ElementType::Intrinsic(Cow::Borrowed(DEFAULT_ELEMENT))
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ElementType::Intrinsic(a), ElementType::Intrinsic(b)) => a == b,
            (ElementType::Component(a), ElementType::Component(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Intrinsic(tag) => f.debug_tuple("Intrinsic").field(tag).finish(),
            ElementType::Component(c) => f
                .debug_tuple("Component")
                .field(&c.display_name().unwrap_or("<anonymous>"))
                .finish(),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&'static str> for ElementType {
    fn from(tag: &'static str) -> Self {
        ElementType::Intrinsic(Cow::Borrowed(tag))
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        ElementType::Intrinsic(Cow::Owned(tag))
    }
}

impl From<Arc<dyn Component>> for ElementType {
    fn from(component: Arc<dyn Component>) -> Self {
        ElementType::Component(component)
    }
}
