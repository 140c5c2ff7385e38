//! Path expression segments: `tag` or `tag[displayName]`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::document::Element;

/// Qualified segment pattern: tag followed by a bracketed display name.
/// Only the start is anchored, so anything after the last `]` is ignored.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static QUALIFIED_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\[(.*)\]").expect("valid regex"));

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Tag to match.
    pub tag: String,
    /// Display name to match, if the segment is qualified.
    pub name: Option<String>,
}

impl PathSegment {
    /// Parse a segment.
    ///
    /// Anything that does not start with `tag[name]` is a bare tag.
    ///
    /// # Examples
    /// ```
    /// use pplx_converter::xml::PathSegment;
    ///
    /// let seg = PathSegment::parse("Pole[P1]");
    /// assert_eq!(seg.tag, "Pole");
    /// assert_eq!(seg.name.as_deref(), Some("P1"));
    ///
    /// assert_eq!(PathSegment::parse("Pole").name, None);
    /// ```
    #[must_use]
    pub fn parse(segment: &str) -> Self {
        match QUALIFIED_SEGMENT.captures(segment) {
            Some(caps) => Self {
                tag: caps[1].to_string(),
                name: Some(caps[2].to_string()),
            },
            None => Self {
                tag: segment.to_string(),
                name: None,
            },
        }
    }

    /// Check whether an element matches this segment.
    ///
    /// A qualified segment requires the element's `name_attribute` to equal
    /// the name exactly; a bare segment only compares tags.
    #[must_use]
    pub fn matches(&self, element: Element<'_>, name_attribute: &str) -> bool {
        if element.tag() != self.tag {
            return false;
        }
        match &self.name {
            Some(name) => element.attribute(name_attribute) == Some(name.as_str()),
            None => true,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}[{}]", self.tag, name),
            None => f.write_str(&self.tag),
        }
    }
}
