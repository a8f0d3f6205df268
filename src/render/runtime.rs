//! Runtime: resolve an element type plus props into a rendered element.
//!
//! The [`Runtime`] is the only place render failures originate. With
//! `strict_elements` enabled it rejects intrinsic tags outside the known
//! element table; otherwise any tag renders.

use crate::class::class_names;
use crate::component::elements::is_intrinsic;
use crate::props::{PropValue, Props};

use super::element::Element;
use super::element_type::ElementType;
use super::error::RenderError;

/// Default name of the class prop.
pub const DEFAULT_CLASS_PROP: &str = "class";

/// Name of the prop carrying child elements.
pub const CHILDREN_PROP: &str = "children";

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// A renderable unit: a function of props producing an element.
pub trait Component: Send + Sync {
    /// Name used in diagnostics.
    fn display_name(&self) -> Option<&str> {
        None
    }

    /// Render with the given props.
    fn render(&self, props: Props, runtime: &Runtime) -> Result<Element, RenderError>;
}

impl<F> Component for F
where
    F: Fn(Props, &Runtime) -> Result<Element, RenderError> + Send + Sync,
{
    fn render(&self, props: Props, runtime: &Runtime) -> Result<Element, RenderError> {
        self(props, runtime)
    }
}

// ---------------------------------------------------------------------------
// RuntimeConfig
// ---------------------------------------------------------------------------

/// Configuration for the runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Name of the class prop, both the override prop bound components
    /// intercept and the attribute they render.
    pub class_prop: String,
    /// Reject intrinsic tags that are not known elements.
    pub strict_elements: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            class_prop: DEFAULT_CLASS_PROP.to_owned(),
            strict_elements: false,
        }
    }
}

impl RuntimeConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class prop name (builder).
    pub fn with_class_prop(mut self, class_prop: impl Into<String>) -> Self {
        self.class_prop = class_prop.into();
        self
    }

    /// Enable or disable intrinsic tag checking (builder).
    pub fn with_strict_elements(mut self, strict: bool) -> Self {
        self.strict_elements = strict;
        self
    }
}

// ---------------------------------------------------------------------------
// Runtime
// ---------------------------------------------------------------------------

/// Renders element types. Holds no state besides its config.
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    config: RuntimeConfig,
}

impl Runtime {
    /// Create a runtime with the given config.
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// The runtime configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Name of the class prop.
    pub fn class_prop(&self) -> &str {
        &self.config.class_prop
    }

    /// Render `element_type` with `props`.
    ///
    /// Intrinsic tags become an [`Element`] whose class attribute is taken from
    /// the class prop; components are rendered through [`Component::render`].
    pub fn render(&self, element_type: &ElementType, props: Props) -> Result<Element, RenderError> {
        match element_type {
            ElementType::Intrinsic(tag) => self.render_intrinsic(tag, props),
            ElementType::Component(component) => component.render(props, self),
        }
    }

    /// Render a component directly.
    pub fn render_component(
        &self,
        component: &dyn Component,
        props: Props,
    ) -> Result<Element, RenderError> {
        component.render(props, self)
    }

    fn render_intrinsic(&self, tag: &str, mut props: Props) -> Result<Element, RenderError> {
        if self.config.strict_elements && !is_intrinsic(tag) {
            tracing::debug!(tag, "rejecting unknown intrinsic element");
            return Err(RenderError::UnknownElement { tag: tag.to_owned() });
        }
        let class = props.remove(&self.config.class_prop).and_then(|value| match value {
            PropValue::Str(s) => Some(s),
            PropValue::Null => None,
            other => Some(class_names([&other.into_class_value()])),
        });
        Ok(Element::from_parts(tag, class, props))
    }
}
