//! Registry mapping tag names to fold strategies.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::handler::FoldStrategy;

/// Registry mapping element tags to strategies.
///
/// One strategy per tag; registering a tag again replaces its strategy.
pub struct StrategyRegistry {
    strategies: HashMap<String, Box<dyn FoldStrategy>>,
}

impl StrategyRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Register a strategy for a specific tag name.
    pub fn register(&mut self, tag_name: impl Into<String>, strategy: impl FoldStrategy + 'static) {
        self.strategies.insert(tag_name.into(), Box::new(strategy));
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, tag_name: impl Into<String>, strategy: impl FoldStrategy + 'static) -> Self {
        self.register(tag_name, strategy);
        self
    }

    /// Get the strategy registered for a tag.
    #[must_use]
    pub fn get(&self, tag_name: &str) -> Option<&dyn FoldStrategy> {
        self.strategies.get(tag_name).map(|s| s.as_ref())
    }

    /// Check if a strategy is registered for a tag.
    #[must_use]
    pub fn has_strategy(&self, tag_name: &str) -> bool {
        self.strategies.contains_key(tag_name)
    }

    /// Return set of all registered tag names.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.strategies.keys().map(|s| s.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.registered_tags().into_iter().collect();
        tags.sort_unstable();
        f.debug_struct("StrategyRegistry").field("tags", &tags).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::RecurseFn;
    use crate::value::{Entry, Value};
    use crate::xml::Element;

    struct Fixed(&'static str);

    impl FoldStrategy for Fixed {
        fn fold<'d>(&self, _element: Element<'d>, _recurse: &RecurseFn<'d>) -> Entry {
            Entry::new(Some(self.0.to_string()), Value::Text(None))
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = StrategyRegistry::new();
        registry.register("ATTRIBUTES", Fixed("first"));

        assert!(registry.has_strategy("ATTRIBUTES"));
        assert!(!registry.has_strategy("missing"));
        assert!(registry.get("ATTRIBUTES").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_registry_replace() {
        let registry = StrategyRegistry::new()
            .with("X", Fixed("first"))
            .with("X", Fixed("second"));
        assert_eq!(registry.len(), 1);

        let doc = crate::xml::Document::parse("<X/>").unwrap();
        let recurse = |_: Element<'_>| Entry::new(None, Value::Text(None));
        let entry = registry.get("X").unwrap().fold(doc.root(), &recurse);
        assert_eq!(entry.key(), Some("second"));
    }

    #[test]
    fn test_registered_tags() {
        let registry = StrategyRegistry::new()
            .with("A", Fixed("a"))
            .with("B", Fixed("b"));
        let tags = registry.registered_tags();
        assert!(tags.contains("A"));
        assert!(tags.contains("B"));
        assert_eq!(format!("{registry:?}"), r#"StrategyRegistry { tags: ["A", "B"] }"#);
    }

    #[test]
    fn test_empty_registry() {
        let registry = StrategyRegistry::default();
        assert!(registry.is_empty());
    }
}
