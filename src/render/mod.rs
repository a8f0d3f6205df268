//! Host rendering runtime: element types, rendered elements, components, errors.
//!
//! Bound components hand their resolved element type and props to a [`Runtime`],
//! which either produces an intrinsic [`Element`] or delegates to another
//! [`Component`].

pub mod element;
pub mod element_type;
pub mod error;
pub mod runtime;

pub use element::Element;
pub use element_type::{ElementType, DEFAULT_ELEMENT};
pub use error::RenderError;
pub use runtime::{Component, Runtime, RuntimeConfig, CHILDREN_PROP, DEFAULT_CLASS_PROP};
