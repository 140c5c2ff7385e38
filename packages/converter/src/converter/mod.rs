//! Tree converter: owns a parsed document and folds it.
//!
//! Besides [`TreeConverter::convert`], the converter keeps a cursor for manual
//! navigation (see `navigation.rs`) and a flat extraction map filled from
//! path expressions (see `extract.rs`).

mod extract;
mod navigation;

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::config::ConvertOptions;
use crate::engine::FoldEngine;
use crate::error::Result;
use crate::strategy::StrategyRegistry;
use crate::value::{Entry, Record};
use crate::xml::{Document, Element, NodeId};

/// Snapshot of one element: tag, display name and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementInfo {
    pub tag: String,
    pub name: Option<String>,
    pub text: Option<String>,
}

impl ElementInfo {
    fn from_element(element: Element<'_>, name_attribute: &str) -> Self {
        Self {
            tag: element.tag().to_string(),
            name: element.attribute(name_attribute).map(str::to_owned),
            text: element.text().map(str::to_owned),
        }
    }
}

impl fmt::Display for ElementInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        if let Some(name) = &self.name {
            write!(f, "[{name}]")?;
        }
        match self.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => write!(f, " = {text:?}"),
            _ => Ok(()),
        }
    }
}

/// Converts a parsed XML document into a nested structure.
///
/// # Example
///
/// ```
/// use pplx_converter::{StrategyRegistry, TreeConverter};
///
/// let xml = r#"<ROOT><X NAME="p">1</X><Y NAME="q">2</Y></ROOT>"#;
/// let converter = TreeConverter::from_xml(xml, StrategyRegistry::new())?;
///
/// let json = serde_json::to_string(&converter.convert())?;
/// assert_eq!(json, r#"{"ROOT":{"p":"1","q":"2"}}"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct TreeConverter {
    document: Document,
    engine: FoldEngine,
    cursor: NodeId,
    path: Vec<String>,
    data: Record,
}

impl TreeConverter {
    /// Read and parse a file.
    ///
    /// # Errors
    /// Returns `Read` if the file is missing or unreadable and `XmlParse` if
    /// it is not well-formed XML.
    pub fn open(path: impl AsRef<Path>, strategies: StrategyRegistry) -> Result<Self> {
        let document = Document::load(path)?;
        Ok(Self::from_document(document, strategies))
    }

    /// Parse an XML string.
    ///
    /// # Errors
    /// Returns `XmlParse` if the input is not well-formed XML.
    pub fn from_xml(xml: &str, strategies: StrategyRegistry) -> Result<Self> {
        let document = Document::parse(xml)?;
        Ok(Self::from_document(document, strategies))
    }

    /// Wrap an already parsed document.
    #[must_use]
    pub fn from_document(document: Document, strategies: StrategyRegistry) -> Self {
        let root = document.root();
        let cursor = root.id();
        let path = vec![root.tag().to_string()];
        Self {
            engine: FoldEngine::new(strategies),
            document,
            cursor,
            path,
            data: Record::new(),
        }
    }

    /// Replace the conversion options.
    #[must_use]
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.engine.set_options(options);
        self
    }

    /// Replace the strategy registry.
    pub fn set_strategies(&mut self, strategies: StrategyRegistry) {
        self.engine.set_registry(strategies);
    }

    #[must_use]
    pub fn strategies(&self) -> &StrategyRegistry {
        self.engine.registry()
    }

    #[must_use]
    pub fn options(&self) -> &ConvertOptions {
        self.engine.options()
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Fold the whole document, starting at the root.
    ///
    /// Does not touch the cursor or the flat extraction map, so repeated
    /// calls return identical results.
    #[must_use]
    pub fn convert(&self) -> Entry {
        self.engine.fold(self.document.root())
    }

    fn name_attribute(&self) -> &str {
        &self.engine.options().name_attribute
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeafMode;
    use crate::error::ErrorKind;
    use crate::strategy::create_default_registry;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_convert_list_scenario() {
        let xml = r#"<ROOT><ITEM NAME="a">1</ITEM><ITEM NAME="b">2</ITEM></ROOT>"#;
        let converter = TreeConverter::from_xml(xml, StrategyRegistry::new()).unwrap();

        assert_eq!(
            serde_json::to_value(converter.convert()).unwrap(),
            json!({"ROOT": [{"name": "a", "data": "1"}, {"name": "b", "data": "2"}]})
        );
    }

    #[test]
    fn test_convert_is_idempotent() {
        let xml = r#"<ROOT><A><B NAME="x">1</B><B>2</B></A><ATTRIBUTES><V NAME="k">v</V></ATTRIBUTES></ROOT>"#;
        let converter = TreeConverter::from_xml(xml, create_default_registry("NAME")).unwrap();

        assert_eq!(converter.convert(), converter.convert());
    }

    #[test]
    fn test_with_options() {
        let xml = r#"<ROOT><X NAME="p">1</X></ROOT>"#;
        let converter = TreeConverter::from_xml(xml, StrategyRegistry::new())
            .unwrap()
            .with_options(ConvertOptions::new().with_leaf_mode(LeafMode::EmptyRecord));

        assert_eq!(
            serde_json::to_value(converter.convert()).unwrap(),
            json!({"ROOT": {"p": {}}})
        );
    }

    #[test]
    fn test_set_strategies() {
        let xml = r#"<ROOT><ATTRIBUTES NAME="attrs"><V NAME="k">v</V></ATTRIBUTES></ROOT>"#;
        let mut converter = TreeConverter::from_xml(xml, StrategyRegistry::new()).unwrap();
        assert_eq!(
            serde_json::to_value(converter.convert()).unwrap(),
            json!({"ROOT": {"attrs": {"k": "v"}}})
        );

        // The attribute strategy keys its block by tag, not display name.
        converter.set_strategies(create_default_registry("NAME"));
        assert!(converter.strategies().has_strategy("ATTRIBUTES"));
        assert_eq!(
            serde_json::to_value(converter.convert()).unwrap(),
            json!({"ROOT": {"ATTRIBUTES": {"k": "v"}}})
        );
    }

    #[test]
    fn test_malformed_xml() {
        let err = TreeConverter::from_xml("<ROOT><X></ROOT>", StrategyRegistry::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_element_info_display() {
        let info = ElementInfo {
            tag: "Pole".to_string(),
            name: Some("P1".to_string()),
            text: Some(" 40 ".to_string()),
        };
        assert_eq!(info.to_string(), r#"Pole[P1] = "40""#);

        let bare = ElementInfo {
            tag: "Pole".to_string(),
            name: None,
            text: Some("\n  ".to_string()),
        };
        assert_eq!(bare.to_string(), "Pole");
    }
}
