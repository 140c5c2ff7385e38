//! Concrete fold strategies.

mod attributes;

pub use attributes::*;
