//! `BoundComponent`: the component factory, render algorithm and derivations.
//!
//! A bound component pairs an [`Options`] descriptor with a render function.
//! Each render:
//!
//! 1. takes the class prop out of the incoming props,
//! 2. splits the rest into variant flags and element props,
//! 3. resolves the class values of active variants,
//! 4. joins base class, variant classes and the class prop, in that order,
//! 5. omits the class entirely when the joined string is empty,
//! 6. renders the element type with the class and the element props.
//!
//! Derivations (`with_variants`, `extend`, `as_element`, `with_options`) read the
//! descriptor and build a new component from a new descriptor.

use std::fmt;
use std::sync::Arc;

use crate::class::{class_names, merge, ClassValue};
use crate::props::{split_props, PropValue, Props, SplitProps};
use crate::render::{Component, Element, ElementType, RenderError, Runtime, DEFAULT_CLASS_PROP};
use crate::variant::{resolve_variants, VariantMap};

use super::options::{Options, PartialOptions};

/// A component whose class output is governed by an options descriptor.
///
/// Cloning is cheap and shares the descriptor.
#[derive(Clone)]
pub struct BoundComponent {
    options: Arc<Options>,
}

impl BoundComponent {
    /// Build a component from a descriptor.
    pub fn new(options: Options) -> Self {
        tracing::trace!(
            display_name = options.display_name(),
            variants = options.variants().map_or(0, VariantMap::len),
            element = %options.element_type().map_or(crate::render::DEFAULT_ELEMENT, ElementType::label),
            "built class-bound component"
        );
        Self {
            options: Arc::new(options),
        }
    }

    /// The descriptor this component was built from.
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn display_name(&self) -> Option<&str> {
        self.options.display_name()
    }

    /// The element type rendered, falling back to the default tag.
    pub fn element_type(&self) -> ElementType {
        self.options.element_type().cloned().unwrap_or_default()
    }

    /// Resolve the class string for `props`, reading the override class from
    /// the default `"class"` prop.
    ///
    /// Returns `None` when no class would be rendered. For a runtime configured
    /// with another class prop name, use [`class_for_runtime`](Self::class_for_runtime).
    pub fn class_for(&self, props: Props) -> Option<String> {
        self.compose(props, DEFAULT_CLASS_PROP).0
    }

    /// Resolve the class string `render` would produce on `runtime`.
    pub fn class_for_runtime(&self, props: Props, runtime: &Runtime) -> Option<String> {
        self.compose(props, runtime.class_prop()).0
    }

    /// Resolve the class string and the forwarded props.
    fn compose(&self, mut props: Props, class_prop: &str) -> (Option<String>, Props) {
        let custom = props
            .remove(class_prop)
            .map(PropValue::into_class_value)
            .unwrap_or_default();

        let no_variants = VariantMap::new();
        let variants = self.options.variants().unwrap_or(&no_variants);
        let SplitProps {
            component_props,
            variant_props,
        } = split_props(props, variants);

        let variant_classes = ClassValue::List(resolve_variants(variants, &variant_props));
        let class = class_names([self.options.class_name(), &variant_classes, &custom]);

        let class = if class.is_empty() { None } else { Some(class) };
        (class, component_props)
    }

    // -----------------------------------------------------------------------
    // Derivations
    // -----------------------------------------------------------------------

    /// A component whose variants are this one's overlaid with `variants`.
    ///
    /// Same-named variants are replaced, not combined. The display name is kept
    /// unless a non-empty one is given.
    pub fn with_variants(&self, variants: VariantMap, display_name: Option<&str>) -> BoundComponent {
        let options = &self.options;
        let merged = match options.variants() {
            Some(existing) => existing.overlay(&variants),
            None => variants,
        };
        tracing::trace!(derivation = "with_variants", "deriving component");
        BoundComponent::new(Options::from_parts(
            options.class_name().clone(),
            pick_display_name(display_name, options.display_name()),
            Some(merged),
            options.element_type().cloned(),
        ))
    }

    /// A component with `class_name` and `variants` combined into this one's.
    ///
    /// Same-named variants keep both class values. The display name is not
    /// inherited; use [`extend_named`](Self::extend_named) to set one.
    pub fn extend(&self, class_name: impl Into<ClassValue>, variants: VariantMap) -> BoundComponent {
        self.extend_inner(class_name.into(), None, variants)
    }

    /// Like [`extend`](Self::extend) with a display name and optional variants.
    pub fn extend_named(
        &self,
        class_name: impl Into<ClassValue>,
        display_name: Option<&str>,
        variants: Option<VariantMap>,
    ) -> BoundComponent {
        self.extend_inner(
            class_name.into(),
            display_name.map(str::to_owned),
            variants.unwrap_or_default(),
        )
    }

    fn extend_inner(
        &self,
        class_name: ClassValue,
        display_name: Option<String>,
        variants: VariantMap,
    ) -> BoundComponent {
        let options = &self.options;
        let merged = options
            .variants()
            .map_or_else(VariantMap::new, Clone::clone)
            .merge(&variants);
        tracing::trace!(derivation = "extend", "deriving component");
        BoundComponent::new(Options::from_parts(
            merge(options.class_name().clone(), class_name),
            display_name,
            Some(merged),
            options.element_type().cloned(),
        ))
    }

    /// A component rendering `element_type` instead, with everything else kept.
    pub fn as_element(
        &self,
        element_type: impl Into<ElementType>,
        display_name: Option<&str>,
    ) -> BoundComponent {
        let options = &self.options;
        let element_type = element_type.into();
        tracing::trace!(derivation = "as_element", element = %element_type, "deriving component");
        BoundComponent::new(Options::from_parts(
            options.class_name().clone(),
            pick_display_name(display_name, options.display_name()),
            options.variants().cloned(),
            Some(element_type),
        ))
    }

    /// A component built from whatever `transform` returns for this descriptor.
    ///
    /// Fields the transform leaves unset fall back to the static defaults, not
    /// to this component's values: a transform returning
    /// `PartialOptions::new()` yields a component with no class and no variants.
    /// Start from [`Options::to_partial`] to keep fields.
    pub fn with_options<F>(&self, transform: F) -> BoundComponent
    where
        F: FnOnce(&Options) -> PartialOptions,
    {
        let partial = transform(&self.options);
        tracing::trace!(derivation = "with_options", "deriving component");
        BoundComponent::new(Options::with_defaults(partial))
    }
}

/// A non-empty new name wins, otherwise the previous name is kept.
fn pick_display_name(new: Option<&str>, previous: Option<&str>) -> Option<String> {
    new.filter(|name| !name.is_empty())
        .or(previous)
        .map(str::to_owned)
}

impl Component for BoundComponent {
    fn display_name(&self) -> Option<&str> {
        self.options.display_name()
    }

    fn render(&self, props: Props, runtime: &Runtime) -> Result<Element, RenderError> {
        let class_prop = runtime.class_prop();
        let (class, component_props) = self.compose(props, class_prop);

        let mut forwarded = Props::with_capacity(component_props.len() + 1);
        if let Some(class) = class {
            forwarded.insert(class_prop, class);
        }
        forwarded.extend(component_props);

        runtime.render(&self.element_type(), forwarded)
    }
}

impl From<BoundComponent> for ElementType {
    fn from(component: BoundComponent) -> Self {
        ElementType::Component(Arc::new(component))
    }
}

impl fmt::Debug for BoundComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundComponent")
            .field("options", &self.options)
            .finish()
    }
}
