//! Options descriptors: the immutable record a bound component is built from.

use crate::class::ClassValue;
use crate::render::ElementType;
use crate::variant::VariantMap;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Descriptor of a bound component: base class, display name, variants and
/// element type.
///
/// Fields are read through accessors. Derivation always builds a new
/// descriptor, an existing one is never modified after it is attached to a
/// component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    class_name: ClassValue,
    display_name: Option<String>,
    variants: Option<VariantMap>,
    element_type: Option<ElementType>,
}

impl Options {
    /// An empty descriptor: no class, no name, no variants, no element type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill in defaults for a partial descriptor.
    ///
    /// Unset fields take the static defaults only: no class, no display name,
    /// no variants and the default element type.
    pub fn with_defaults(partial: PartialOptions) -> Self {
        Self {
            class_name: partial.class_name,
            display_name: partial.display_name,
            variants: partial.variants,
            element_type: Some(partial.element_type.unwrap_or_default()),
        }
    }

    /// Set the base class value (builder).
    pub fn with_class_name(mut self, class_name: impl Into<ClassValue>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the display name (builder).
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the variant map (builder).
    pub fn with_variants(mut self, variants: VariantMap) -> Self {
        self.variants = Some(variants);
        self
    }

    /// Set the element type (builder).
    pub fn with_element_type(mut self, element_type: impl Into<ElementType>) -> Self {
        self.element_type = Some(element_type.into());
        self
    }

    /// Class value always applied.
    pub fn class_name(&self) -> &ClassValue {
        &self.class_name
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn variants(&self) -> Option<&VariantMap> {
        self.variants.as_ref()
    }

    pub fn element_type(&self) -> Option<&ElementType> {
        self.element_type.as_ref()
    }

    /// A partial descriptor carrying every field of this one.
    pub fn to_partial(&self) -> PartialOptions {
        PartialOptions {
            class_name: self.class_name.clone(),
            display_name: self.display_name.clone(),
            variants: self.variants.clone(),
            element_type: self.element_type.clone(),
        }
    }

    pub(crate) fn from_parts(
        class_name: ClassValue,
        display_name: Option<String>,
        variants: Option<VariantMap>,
        element_type: Option<ElementType>,
    ) -> Self {
        Self {
            class_name,
            display_name,
            variants,
            element_type,
        }
    }
}

// ---------------------------------------------------------------------------
// PartialOptions
// ---------------------------------------------------------------------------

/// A descriptor with every field optional, as returned by
/// [`BoundComponent::with_options`](crate::component::BoundComponent::with_options)
/// transforms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialOptions {
    pub class_name: ClassValue,
    pub display_name: Option<String>,
    pub variants: Option<VariantMap>,
    pub element_type: Option<ElementType>,
}

impl PartialOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base class value (builder).
    pub fn with_class_name(mut self, class_name: impl Into<ClassValue>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the display name (builder).
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the variant map (builder).
    pub fn with_variants(mut self, variants: VariantMap) -> Self {
        self.variants = Some(variants);
        self
    }

    /// Set the element type (builder).
    pub fn with_element_type(mut self, element_type: impl Into<ElementType>) -> Self {
        self.element_type = Some(element_type.into());
        self
    }
}

impl From<Options> for PartialOptions {
    fn from(options: Options) -> Self {
        PartialOptions {
            class_name: options.class_name,
            display_name: options.display_name,
            variants: options.variants,
            element_type: options.element_type,
        }
    }
}
