//! Attribute-focused folding.

use crate::config::DEFAULT_DISPLAY_NAME_ATTRIBUTE;
use crate::strategy::handler::{FoldStrategy, RecurseFn};
use crate::value::{Entry, Record, Value};
use crate::xml::Element;

/// Folds an attribute block into `{tag: {child name: child text}}`.
///
/// Only direct children are read; grandchildren are ignored. A child without
/// a display name contributes an absent key, and a later child with the same
/// name overwrites an earlier one.
#[derive(Debug, Clone)]
pub struct AttributeStrategy {
    key_attribute: String,
}

impl AttributeStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_attribute(DEFAULT_DISPLAY_NAME_ATTRIBUTE)
    }

    /// Use a different attribute as the key of each child.
    #[must_use]
    pub fn with_key_attribute(attribute: impl Into<String>) -> Self {
        Self {
            key_attribute: attribute.into(),
        }
    }
}

impl Default for AttributeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldStrategy for AttributeStrategy {
    fn fold<'d>(&self, element: Element<'d>, _recurse: &RecurseFn<'d>) -> Entry {
        let inner: Record = element
            .children()
            .map(|child| {
                Entry::new(
                    child.attribute(&self.key_attribute).map(str::to_owned),
                    Value::text(child.text()),
                )
            })
            .collect();

        Entry::new(Some(element.tag().to_string()), Value::Record(inner))
    }
}
