//! Props: per-render property bags and the variant/element split.

pub mod value;
pub mod bag;
pub mod split;

pub use value::PropValue;
pub use bag::Props;
pub use split::{split_props, SplitProps};
