//! # classbound
//!
//! Class-bound UI components: components that render a single element whose
//! class attribute is composed from a base class, boolean-controlled variants
//! and a caller-supplied class.
//!
//! A component is built from an immutable [`Options`] descriptor. Derivations
//! (`extend`, `with_variants`, `as_element`, `with_options`) produce new
//! components from an existing one's descriptor and never modify it.
//!
//! ```ignore
//! use classbound::{create, Options, Props, Runtime, VariantMap};
//! use classbound::render::Component;
//!
//! let card = create(
//!     Options::new()
//!         .with_class_name("card")
//!         .with_variants(VariantMap::from([("active", "card--active")])),
//! );
//! let el = card.render(Props::new().with("active", true).with("id", "x"), &Runtime::default())?;
//! assert_eq!(el.class(), Some("card card--active"));
//! ```
//!
//! ## Core Systems
//!
//! - **[`class`]**: Class values, binary merge, class-string joining and tokenizing
//! - **[`variant`]**: Ordered variant maps: combining merge, overlay, resolution
//! - **[`props`]**: Prop values, ordered prop bags, variant/element splitting
//! - **[`component`]**: Options, the component factory, derivations, creation surface
//! - **[`render`]**: Host runtime: element types, rendered elements, config, errors
//! - **[`testing`]**: Markup serialisation and element-tree queries for tests

extern crate self as classbound;

// Foundation
pub mod class;
pub mod props;
pub mod variant;

// Components
pub mod component;

// Host runtime
pub mod render;

// Testing support
pub mod testing;

pub use class::{class_names, merge as merge_class_values, ClassValue};
pub use component::elements;
pub use component::{
    create, create_named, create_with_variants, intrinsic, BoundComponent, CreateArgs,
    ElementFactory, Options, PartialOptions,
};
pub use props::{split_props, PropValue, Props, SplitProps};
pub use render::{Component, Element, ElementType, RenderError, Runtime, RuntimeConfig};
pub use variant::{resolve_variants, VariantMap};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use classbound_macros::{classes, variants};
