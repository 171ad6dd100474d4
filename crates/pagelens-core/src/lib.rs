//! # PageLens Core
//!
//! Turns a rendered page into a compact text tree plus an identifier to
//! geometry table.
//!
//! ## Pipeline
//!
//! 1. [`identity`] - stable identifiers and recorded boxes on the live tree
//! 2. [`annotations`] - scroll position and live form values
//! 3. [`cloner`] - detached copy that all pruning works on
//! 4. [`pruning`] - ordered reduction passes
//! 5. [`serializer`] - indented pseudo-HTML
//!
//! [`Simplifier`] drives the whole sequence.

pub mod annotations;
pub mod cloner;
pub mod geometry;
pub mod identity;
pub mod pruning;
pub mod serializer;
pub mod simplifier;
pub mod visibility;

pub use cloner::{clone_for_pruning, ClonedPage};
pub use geometry::{bounding_box, is_scrollable, scroll_percentage};
pub use identity::{assign_identifiers, next_identifier};
pub use pruning::{run_pipeline, PruneContext};
pub use serializer::serialize;
pub use simplifier::Simplifier;
