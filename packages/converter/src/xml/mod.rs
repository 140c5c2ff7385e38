//! XML document model and path-expression helpers.

mod document;
mod path;
mod utils;

pub use document::{Document, Element, NodeId};
pub use path::PathSegment;
pub use utils::{element_children, get_tag_name};
