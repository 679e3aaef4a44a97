mod error;
mod loader;
mod model;

pub use error::*;
pub use loader::*;
pub use model::*;
