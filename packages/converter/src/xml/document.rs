//! Owned, immutable element tree.
//!
//! `roxmltree` borrows its input, which makes it awkward to keep around for
//! the lifetime of a converter. The document is therefore copied once into an
//! arena of element records. Each record keeps a back-link to its parent so
//! upward navigation does not need to search the tree.

use std::fmt;
use std::path::Path;

use roxmltree::{Node, ParsingOptions};

use super::utils::{element_children, get_tag_name};
use crate::error::{ConvertError, Result};

/// Index of an element inside a [`Document`].
pub type NodeId = usize;

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed XML document holding only element nodes.
///
/// The root element always has id `0`.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<ElementData>,
}

impl Document {
    /// Parse a document from an XML string.
    ///
    /// # Errors
    /// Returns `XmlParse` if the input is not well-formed XML. A `DOCTYPE`
    /// declaration is accepted.
    pub fn parse(xml: &str) -> Result<Self> {
        let parsed = roxmltree::Document::parse_with_options(
            xml,
            ParsingOptions {
                allow_dtd: true,
                ..ParsingOptions::default()
            },
        )?;
        let mut elements = Vec::new();
        build(&mut elements, parsed.root_element(), None);
        Ok(Self { elements })
    }

    /// Read and parse a document from disk.
    ///
    /// # Errors
    /// Returns `Read` if the file cannot be read and `XmlParse` if its
    /// content is not well-formed XML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::parse(&xml)?;
        tracing::debug!(
            path = %path.display(),
            elements = document.len(),
            "Loaded document"
        );
        Ok(document)
    }

    /// The root element.
    #[must_use]
    pub fn root(&self) -> Element<'_> {
        Element { doc: self, id: 0 }
    }

    /// Look up an element by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<Element<'_>> {
        (id < self.elements.len()).then_some(Element { doc: self, id })
    }

    /// Number of elements in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// A parsed document always has a root, so this is only true for
    /// documents that were never built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn build(elements: &mut Vec<ElementData>, node: Node<'_, '_>, parent: Option<NodeId>) -> NodeId {
    let id = elements.len();
    elements.push(ElementData {
        tag: get_tag_name(node).to_string(),
        attributes: node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect(),
        text: leading_text(node),
        parent,
        children: Vec::new(),
    });

    let children: Vec<NodeId> = element_children(node)
        .map(|child| build(elements, child, Some(id)))
        .collect();
    elements[id].children = children;
    id
}

/// Text nodes before the first child element, joined. Comments and
/// processing instructions in between are skipped.
fn leading_text(node: Node<'_, '_>) -> Option<String> {
    let text: String = node
        .children()
        .take_while(|child| !child.is_element())
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect();
    (!text.is_empty()).then_some(text)
}

/// Borrowed view of one element in a [`Document`].
#[derive(Clone, Copy)]
pub struct Element<'d> {
    doc: &'d Document,
    id: NodeId,
}

impl<'d> Element<'d> {
    fn data(&self) -> &'d ElementData {
        &self.doc.elements[self.id]
    }

    /// Arena id of this element.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tag name, without namespace prefix.
    #[must_use]
    pub fn tag(&self) -> &'d str {
        &self.data().tag
    }

    /// Value of the named attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'d str> {
        self.data()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text before the first child element, verbatim, with comments and
    /// processing instructions left out.
    #[must_use]
    pub fn text(&self) -> Option<&'d str> {
        self.data().text.as_deref()
    }

    /// Direct child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = Element<'d>> + 'd {
        let doc = self.doc;
        self.data()
            .children
            .iter()
            .map(move |&id| Element { doc, id })
    }

    /// Number of direct child elements.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.data().children.len()
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.data().children.is_empty()
    }

    /// Parent element, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Element<'d>> {
        self.data().parent.map(|id| Element { doc: self.doc, id })
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.data().parent.is_none()
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Element<'_> {}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag", &self.tag())
            .field("text", &self.text())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<PPLX version="1">
        <Pole NAME="P1"><Height>40</Height></Pole>
        <Pole NAME="P2"/>
    </PPLX>"#;

    #[test]
    fn test_parse_structure() {
        let doc = Document::parse(XML).unwrap();
        let root = doc.root();

        assert_eq!(root.tag(), "PPLX");
        assert_eq!(root.attribute("version"), Some("1"));
        assert!(root.is_root());
        assert_eq!(root.child_count(), 2);
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_children_and_parent_links() {
        let doc = Document::parse(XML).unwrap();
        let root = doc.root();
        let poles: Vec<_> = root.children().collect();

        assert_eq!(poles[0].attribute("NAME"), Some("P1"));
        assert_eq!(poles[1].attribute("NAME"), Some("P2"));
        assert_eq!(poles[0].parent(), Some(root));

        let height = poles[0].children().next().unwrap();
        assert_eq!(height.tag(), "Height");
        assert_eq!(height.text(), Some("40"));
        assert_eq!(height.parent(), Some(poles[0]));
        assert!(!height.has_children());
    }

    #[test]
    fn test_text_is_verbatim_and_optional() {
        let doc = Document::parse("<a>  padded <b/></a>").unwrap();
        let root = doc.root();
        assert_eq!(root.text(), Some("  padded "));
        assert_eq!(root.children().next().unwrap().text(), None);
    }

    #[test]
    fn test_text_skips_leading_comment() {
        let doc = Document::parse("<X NAME=\"p\"><!-- unit: ft -->40</X>").unwrap();
        assert_eq!(doc.root().text(), Some("40"));
    }

    #[test]
    fn test_text_joins_around_comments_and_instructions() {
        let doc = Document::parse("<a>4<!--c-->0<?pi x?>.5<b>tail</b>after</a>").unwrap();
        assert_eq!(doc.root().text(), Some("40.5"));
    }

    #[test]
    fn test_comment_only_has_no_text() {
        let doc = Document::parse("<a><!-- nothing --></a>").unwrap();
        assert_eq!(doc.root().text(), None);
    }

    #[test]
    fn test_doctype_is_accepted() {
        let xml = r#"<?xml version="1.0"?><!DOCTYPE ROOT><ROOT><X NAME="p">1</X></ROOT>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(doc.root().tag(), "ROOT");
        assert_eq!(doc.root().children().next().unwrap().text(), Some("1"));
    }

    #[test]
    fn test_doctype_internal_entity() {
        let xml = r#"<!DOCTYPE ROOT [<!ENTITY unit "ft">]><ROOT>40 &unit;</ROOT>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(doc.root().text(), Some("40 ft"));
    }

    #[test]
    fn test_entities_are_decoded() {
        let doc = Document::parse("<a NAME=\"x &amp; y\">1 &lt; 2</a>").unwrap();
        assert_eq!(doc.root().attribute("NAME"), Some("x & y"));
        assert_eq!(doc.root().text(), Some("1 < 2"));
    }

    #[test]
    fn test_get_by_id() {
        let doc = Document::parse(XML).unwrap();
        assert_eq!(doc.get(0), Some(doc.root()));
        assert!(doc.get(99).is_none());
    }

    #[test]
    fn test_parse_malformed() {
        let result = Document::parse("<a><b></a>");
        assert!(matches!(result, Err(ConvertError::XmlParse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Document::load("/nonexistent/project.pplx");
        assert!(matches!(result, Err(ConvertError::Read { .. })));
    }
}
