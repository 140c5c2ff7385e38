//! Fold strategy trait definition.

use crate::value::Entry;
use crate::xml::Element;

/// Function type for folding a child element with the engine's own logic.
pub type RecurseFn<'d> = dyn Fn(Element<'d>) -> Entry + 'd;

/// Trait for tag-specific folding logic.
///
/// A strategy registered for a tag replaces the default fold for every
/// element with that tag, at any depth. It receives a `recurse` function so
/// it can hand children back to the engine when it wants to.
pub trait FoldStrategy: Send + Sync {
    /// Fold the element into a single key/value pair.
    ///
    /// # Arguments
    /// * `element` - The element to fold
    /// * `recurse` - Folds a child element through the engine
    fn fold<'d>(&self, element: Element<'d>, recurse: &RecurseFn<'d>) -> Entry;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use crate::xml::Document;

    struct TagOnly;

    impl FoldStrategy for TagOnly {
        fn fold<'d>(&self, element: Element<'d>, _recurse: &RecurseFn<'d>) -> Entry {
            Entry::new(Some(element.tag().to_string()), Value::Text(None))
        }
    }

    #[test]
    fn test_strategy_trait() {
        let doc = Document::parse("<test/>").unwrap();
        let recurse = |_: Element<'_>| Entry::new(None, Value::Text(None));

        let entry = TagOnly.fold(doc.root(), &recurse);
        assert_eq!(entry.key(), Some("test"));
    }
}
