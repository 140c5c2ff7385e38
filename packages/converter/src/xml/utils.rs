//! Helpers over `roxmltree` nodes used while building a [`Document`].
//!
//! [`Document`]: super::Document

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use pplx_converter::xml::get_tag_name;
///
/// let xml = r#"<PPLX><Pole/></PPLX>"#;
/// let doc = Document::parse(xml).unwrap();
/// let pole = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(pole), "Pole");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get all element children of a node.
///
/// Text nodes, comments and processing instructions are excluded.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name() {
        let xml = r#"<root><child/></root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:root xmlns:ns="http://example.com"><ns:child/></ns:root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_element_children() {
        let xml = r#"<root>text<child1/><!-- note -->more<child2/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        let children: Vec<_> = element_children(root).map(get_tag_name).collect();
        assert_eq!(children, vec!["child1", "child2"]);
    }
}
