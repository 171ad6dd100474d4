//! # PageLens Protocols
//!
//! Shared definitions for the PageLens simplifier.
//! Contains only data types, constants and errors - no pipeline logic.
//!
//! ## Core Types
//!
//! - [`BoundingBox`] - Screen-space rectangle of a rendered element
//! - [`IdToBboxMap`] - Identifier to geometry side table
//! - [`SimplifyOptions`] - Caller options recognized by the pipeline
//! - [`SimplifiedPage`] - Result of one invocation

pub mod attributes;
pub mod error;
pub mod types;

pub use attributes::{
    is_aria_attribute, CORE_ATTRIBUTES_TO_KEEP, CURRENTLY_OBSCURED_ATTRIBUTE, ID_ATTRIBUTE,
    SCROLLABLE_ATTRIBUTE, SCROLLED_FROM_LEFT_ATTRIBUTE, SCROLLED_FROM_TOP_ATTRIBUTE,
};
pub use error::{DomError, RenderError, SimplifyError};
pub use types::*;
