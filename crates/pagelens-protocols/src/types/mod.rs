//! Common data types shared across the pipeline.

mod geometry;
mod options;
mod page;
mod style;

pub use geometry::*;
pub use options::*;
pub use page::*;
pub use style::*;

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
