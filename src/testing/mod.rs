//! Testing helpers: markup serialisation and queries over rendered elements.
//!
//! Use [`to_markup`] to turn a rendered [`Element`](crate::render::Element) tree
//! into a compact HTML-like string for snapshot-style assertions, and
//! [`render_to_markup`] to render a component and serialise it in one step.
//! The `find_*` functions locate elements inside a rendered tree by class, tag or id.

pub mod query;
pub mod snapshot;

pub use query::{find_all, find_by_class, find_by_id, find_by_tag, walk};
pub use snapshot::{render_to_markup, to_markup};
