//! Creation surface: build bound components from descriptors or class values.
//!
//! Three call shapes are supported, each with its own constructor:
//!
//! - [`create`] with an [`Options`] descriptor (used as given, no defaults),
//! - [`create_named`]: class value, optional display name, variants and element type,
//! - [`create_with_variants`]: class value, variants and optional element type.
//!
//! [`CreateArgs`] carries any of the three shapes for code that dispatches on them.
//! [`ElementFactory`] is the same surface pre-bound to one element type.

use crate::class::ClassValue;
use crate::render::ElementType;
use crate::variant::VariantMap;

use super::bound::BoundComponent;
use super::options::Options;

// ---------------------------------------------------------------------------
// CreateArgs
// ---------------------------------------------------------------------------

/// Arguments of a creation call, one variant per call shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateArgs {
    /// A full descriptor.
    Options(Options),
    /// Class value first, then display name, variants and element type.
    Named {
        class_name: ClassValue,
        display_name: Option<String>,
        variants: Option<VariantMap>,
        element_type: Option<ElementType>,
    },
    /// Class value first, then variants and element type.
    Variants {
        class_name: ClassValue,
        variants: VariantMap,
        element_type: Option<ElementType>,
    },
}

impl CreateArgs {
    /// The descriptor these arguments describe.
    pub fn into_options(self) -> Options {
        match self {
            CreateArgs::Options(options) => options,
            CreateArgs::Named {
                class_name,
                display_name,
                variants,
                element_type,
            } => Options::from_parts(class_name, display_name, variants, element_type),
            CreateArgs::Variants {
                class_name,
                variants,
                element_type,
            } => Options::from_parts(
                class_name,
                None,
                Some(variants),
                Some(element_type.unwrap_or_default()),
            ),
        }
    }
}

impl From<Options> for CreateArgs {
    fn from(options: Options) -> Self {
        CreateArgs::Options(options)
    }
}

impl From<ClassValue> for CreateArgs {
    fn from(class_name: ClassValue) -> Self {
        CreateArgs::Named {
            class_name,
            display_name: None,
            variants: None,
            element_type: None,
        }
    }
}

impl From<&str> for CreateArgs {
    fn from(class_name: &str) -> Self {
        ClassValue::from(class_name).into()
    }
}

impl From<String> for CreateArgs {
    fn from(class_name: String) -> Self {
        ClassValue::from(class_name).into()
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

/// Create a bound component from any call shape.
pub fn create(args: impl Into<CreateArgs>) -> BoundComponent {
    BoundComponent::new(args.into().into_options())
}

/// Create from a class value, display name, variants and element type.
///
/// Absent fields stay absent; rendering falls back to the default tag.
pub fn create_named(
    class_name: impl Into<ClassValue>,
    display_name: Option<&str>,
    variants: Option<VariantMap>,
    element_type: Option<ElementType>,
) -> BoundComponent {
    create(CreateArgs::Named {
        class_name: class_name.into(),
        display_name: display_name.map(str::to_owned),
        variants,
        element_type,
    })
}

/// Create from a class value and variants, with no display name.
pub fn create_with_variants(
    class_name: impl Into<ClassValue>,
    variants: VariantMap,
    element_type: Option<ElementType>,
) -> BoundComponent {
    create(CreateArgs::Variants {
        class_name: class_name.into(),
        variants,
        element_type,
    })
}

// ---------------------------------------------------------------------------
// ElementFactory
// ---------------------------------------------------------------------------

/// The creation surface bound to one element type.
///
/// Components it creates always render its element type, whatever the
/// arguments say.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFactory {
    element_type: ElementType,
}

impl ElementFactory {
    pub fn new(element_type: impl Into<ElementType>) -> Self {
        Self {
            element_type: element_type.into(),
        }
    }

    /// The element type components are bound to.
    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// Create a bound component from any call shape.
    pub fn create(&self, args: impl Into<CreateArgs>) -> BoundComponent {
        let element_type = self.element_type.clone();
        create(args).with_options(move |options| options.to_partial().with_element_type(element_type))
    }

    /// See [`create_named`].
    pub fn create_named(
        &self,
        class_name: impl Into<ClassValue>,
        display_name: Option<&str>,
        variants: Option<VariantMap>,
    ) -> BoundComponent {
        self.create(CreateArgs::Named {
            class_name: class_name.into(),
            display_name: display_name.map(str::to_owned),
            variants,
            element_type: None,
        })
    }

    /// See [`create_with_variants`].
    pub fn create_with_variants(
        &self,
        class_name: impl Into<ClassValue>,
        variants: VariantMap,
    ) -> BoundComponent {
        self.create(CreateArgs::Variants {
            class_name: class_name.into(),
            variants,
            element_type: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::Props;
    use crate::render::{Component, Runtime};

    #[test]
    fn create_from_options_uses_them_as_given() {
        let c = create(Options::new().with_class_name("card"));
        assert!(c.options().element_type().is_none());
        assert_eq!(c.element_type(), ElementType::from("div"));
        assert_eq!(c.class_for(Props::new()), Some("card".into()));
    }

    #[test]
    fn create_from_class_string() {
        let c = create("btn");
        assert_eq!(c.class_for(Props::new()), Some("btn".into()));
        assert!(c.options().variants().is_none());
    }

    #[test]
    fn create_named_shape() {
        let c = create_named(
            ["btn", "btn-sm"],
            Some("SmallButton"),
            Some(VariantMap::from([("primary", "btn-primary")])),
            Some(ElementType::from("button")),
        );
        assert_eq!(c.display_name(), Some("SmallButton"));
        assert_eq!(c.element_type(), ElementType::from("button"));
        assert_eq!(
            c.class_for(Props::new().with("primary", true)),
            Some("btn btn-sm btn-primary".into())
        );
    }

    #[test]
    fn create_named_leaves_element_type_unset() {
        let c = create_named("x", None, None, None);
        assert!(c.options().element_type().is_none());
        assert!(c.display_name().is_none());
    }

    #[test]
    fn create_with_variants_shape() {
        let c = create_with_variants("tag", VariantMap::from([("on", "tag--on")]), None);
        assert!(c.display_name().is_none());
        assert_eq!(c.options().element_type(), Some(&ElementType::from("div")));
        assert_eq!(c.class_for(Props::new().with("on", 1)), Some("tag tag--on".into()));

        let span = create_with_variants("tag", VariantMap::new(), Some("span".into()));
        assert_eq!(span.element_type(), ElementType::from("span"));
    }

    #[test]
    fn element_factory_overrides_element_type() {
        let factory = ElementFactory::new("button");
        let c = factory.create(Options::new().with_class_name("btn").with_element_type("a"));
        assert_eq!(c.element_type(), ElementType::from("button"));
        let el = c.render(Props::new(), &Runtime::default()).unwrap();
        assert_eq!(el.tag(), "button");
        assert_eq!(el.class(), Some("btn"));
    }

    #[test]
    fn element_factory_keeps_other_fields() {
        let factory = ElementFactory::new("li");
        let c = factory.create_named("item", Some("Item"), Some(VariantMap::from([("done", "item--done")])));
        assert_eq!(c.display_name(), Some("Item"));
        assert_eq!(
            c.class_for(Props::new().with("done", true)),
            Some("item item--done".into())
        );

        let c = factory.create_with_variants("row", VariantMap::from([("odd", "row--odd")]));
        assert_eq!(c.element_type(), ElementType::from("li"));
        assert_eq!(c.class_for(Props::new().with("odd", true)), Some("row row--odd".into()));
    }

    #[test]
    fn into_options_per_shape() {
        let named = CreateArgs::from("a").into_options();
        assert_eq!(named, Options::new().with_class_name("a"));

        let variants = CreateArgs::Variants {
            class_name: "a".into(),
            variants: VariantMap::new(),
            element_type: None,
        }
        .into_options();
        assert_eq!(
            variants,
            Options::new()
                .with_class_name("a")
                .with_variants(VariantMap::new())
                .with_element_type("div")
        );
    }
}
