//! Fold engine that turns an element tree into a converted structure.

use std::collections::HashSet;

use crate::config::{ConvertOptions, LeafMode};
use crate::strategy::StrategyRegistry;
use crate::value::{Entry, Record, Value};
use crate::xml::Element;

/// Engine that folds elements using the registry and the default heuristic.
///
/// For every element the registry is consulted first. Elements without a
/// registered strategy are folded by the default rules:
///
/// - no children: `{key: text}` (or `{key: {}}` with [`LeafMode::EmptyRecord`])
/// - a repeated child tag: `{key: [{name, data}, ...]}` in document order
/// - all child tags distinct: `{key: {child key: child value, ...}}`
///
/// `key` is the element's display name, falling back to its tag.
#[derive(Debug, Default)]
pub struct FoldEngine {
    registry: StrategyRegistry,
    options: ConvertOptions,
}

impl FoldEngine {
    /// Create a new engine with the given registry and default options.
    #[must_use]
    pub fn new(registry: StrategyRegistry) -> Self {
        Self {
            registry,
            options: ConvertOptions::default(),
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn set_registry(&mut self, registry: StrategyRegistry) {
        tracing::debug!(strategies = ?registry, "Replacing strategy registry");
        self.registry = registry;
    }

    #[must_use]
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ConvertOptions) {
        self.options = options;
    }

    /// Fold an element and its descendants.
    pub fn fold(&self, element: Element<'_>) -> Entry {
        let tag = element.tag();

        if let Some(strategy) = self.registry.get(tag) {
            tracing::trace!(tag, "Folding with registered strategy");
            let recurse = |child: Element<'_>| self.fold(child);
            return strategy.fold(element, &recurse);
        }

        self.fold_default(element)
    }

    fn fold_default(&self, element: Element<'_>) -> Entry {
        let key = self.self_key(element);

        if !element.has_children() {
            let value = match self.options.leaf_mode {
                LeafMode::Text => Value::text(element.text()),
                LeafMode::EmptyRecord => Value::Record(Record::new()),
            };
            return Entry::new(Some(key), value);
        }

        let value = if has_repeated_tags(element) {
            Value::List(element.children().map(|child| self.fold(child)).collect())
        } else {
            Value::Record(element.children().map(|child| self.fold(child)).collect())
        };

        Entry::new(Some(key), value)
    }

    /// Display name if present, else the tag.
    fn self_key(&self, element: Element<'_>) -> String {
        element
            .attribute(&self.options.name_attribute)
            .unwrap_or_else(|| element.tag())
            .to_string()
    }
}

/// Check whether any tag occurs more than once among the direct children.
fn has_repeated_tags(element: Element<'_>) -> bool {
    let mut seen = HashSet::new();
    element.children().any(|child| !seen.insert(child.tag()))
}
