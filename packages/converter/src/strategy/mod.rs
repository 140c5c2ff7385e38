//! Tag-keyed fold strategies.
//!
//! A strategy registered for a tag takes over folding of every element with
//! that tag. Tags without a strategy use the engine's default fold.

mod config;
mod core;
mod handler;
pub mod handlers;

pub use config::create_default_registry;
pub use core::StrategyRegistry;
pub use handler::{FoldStrategy, RecurseFn};
pub use handlers::AttributeStrategy;
