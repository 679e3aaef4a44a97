pub mod arguments;
mod error;
pub mod template_lexer;
pub mod template_parser;
pub mod tree;

pub use arguments::Arguments;
pub use error::*;
pub use tree::{Grammar, NodeId, Registration};
