//! Error types for the PageLens protocol layer.

mod dom;
mod render;
mod simplify;

pub use dom::*;
pub use render::*;
pub use simplify::*;
