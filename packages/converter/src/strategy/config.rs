//! Default strategy registry for PPLX project files.

use super::core::StrategyRegistry;
use super::handlers::AttributeStrategy;
use crate::config::DEFAULT_ATTRIBUTES_TAG;

/// Create the registry used for PPLX project files.
///
/// `ATTRIBUTES` blocks are folded with [`AttributeStrategy`], keyed by
/// `name_attribute`. Everything else uses the default fold.
#[must_use]
pub fn create_default_registry(name_attribute: &str) -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();
    registry.register(
        DEFAULT_ATTRIBUTES_TAG,
        AttributeStrategy::with_key_attribute(name_attribute),
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_default_registry() {
        let registry = create_default_registry("NAME");

        assert!(registry.has_strategy("ATTRIBUTES"));
        assert_eq!(registry.len(), 1);
    }
}
