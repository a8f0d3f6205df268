//! Class-bound components: options descriptors, the component factory,
//! derivation operations and the creation surface.

pub mod options;
pub mod bound;
pub mod create;
pub mod elements;

pub use options::{Options, PartialOptions};
pub use bound::BoundComponent;
pub use create::{create, create_named, create_with_variants, CreateArgs, ElementFactory};
pub use elements::{intrinsic, is_intrinsic, INTRINSIC_ELEMENTS};
