//! # PageLens DOM
//!
//! Document model shared by the simplifier and its hosts:
//!
//! - [`Document`] - arena tree with stable [`NodeId`]s and safe in-place mutation
//! - [`parse_html`] - HTML text to [`Document`] via html5ever
//! - [`RenderQuery`] - layout, style and hit-test queries answered by the host
//! - [`StaticRenderer`] / [`PageSnapshot`] - recorded layout for offline runs

mod document;
mod node;
mod parse;
mod render;
mod snapshot;
mod static_render;

pub use document::Document;
pub use node::{Attribute, ElementData, Namespace, NodeId, NodeKind};
pub use parse::parse_html;
pub use render::RenderQuery;
pub use snapshot::{PageSnapshot, SnapshotElement, SnapshotError, SnapshotNode};
pub use static_render::{ElementLayout, StaticRenderer};
