//! Class values: the nested class-name model, binary merge, stringification, tokenizing.

pub mod value;
pub mod join;
pub mod tokenizer;

pub use value::{merge, ClassValue};
pub use join::class_names;
pub use tokenizer::class_tokens;
