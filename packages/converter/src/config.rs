//! Configuration constants and conversion options.

use clap::ValueEnum;

/// Attribute used as the display name (semantic key) of an element.
pub const DEFAULT_DISPLAY_NAME_ATTRIBUTE: &str = "NAME";

/// Tag the default registry folds with the attributes strategy.
pub const DEFAULT_ATTRIBUTES_TAG: &str = "ATTRIBUTES";

/// How the default fold treats an element without children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LeafMode {
    /// Surface the element's text: `{key: text}`.
    #[default]
    Text,
    /// Produce an empty record: `{key: {}}`.
    ///
    /// Leaf text is then only visible through strategies.
    EmptyRecord,
}

/// Options controlling the default fold and path extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Attribute read as an element's display name.
    pub name_attribute: String,
    /// Shape of folded leaf elements.
    pub leaf_mode: LeafMode,
}

impl ConvertOptions {
    /// Create options with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display-name attribute.
    #[must_use]
    pub fn with_name_attribute(mut self, name: impl Into<String>) -> Self {
        self.name_attribute = name.into();
        self
    }

    /// Set the leaf mode.
    #[must_use]
    pub fn with_leaf_mode(mut self, leaf_mode: LeafMode) -> Self {
        self.leaf_mode = leaf_mode;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            name_attribute: DEFAULT_DISPLAY_NAME_ATTRIBUTE.to_string(),
            leaf_mode: LeafMode::default(),
        }
    }
}
