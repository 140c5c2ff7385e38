//! Flat extraction of single values by path expression.

use super::TreeConverter;
use crate::error::{ConvertError, Result};
use crate::value::{Record, Value};
use crate::xml::{Element, PathSegment};

impl TreeConverter {
    /// Resolve a path expression from the document root.
    ///
    /// The leading '/' is optional. The first segment names the root element
    /// itself; each following segment selects the first matching direct child.
    /// The cursor is not used or moved.
    ///
    /// # Errors
    /// Returns `PathNotFound` naming the first segment that did not resolve.
    pub fn resolve(&self, path: &str) -> Result<Element<'_>> {
        let not_found = |segment: &str| ConvertError::PathNotFound {
            path: path.to_string(),
            segment: segment.to_string(),
        };
        let name_attribute = self.name_attribute();
        let mut segments = path.strip_prefix('/').unwrap_or(path).split('/');

        let root = self.document.root();
        let first = segments.next().unwrap_or_default();
        if !PathSegment::parse(first).matches(root, name_attribute) {
            return Err(not_found(first));
        }

        let mut current = root;
        for segment in segments {
            let parsed = PathSegment::parse(segment);
            current = current
                .children()
                .find(|child| parsed.matches(*child, name_attribute))
                .ok_or_else(|| not_found(segment))?;
        }

        Ok(current)
    }

    /// Store the text of the element at `path` in the flat extraction map.
    ///
    /// The value is stored under `key` if given, else under the element's
    /// display name. An element without a display name is stored under an
    /// absent key.
    ///
    /// # Errors
    /// Returns `PathNotFound` if the path does not resolve; the map is left
    /// unchanged.
    pub fn add_to_data(&mut self, path: &str, key: Option<&str>) -> Result<()> {
        let (key, value) = {
            let element = self.resolve(path)?;
            let key = key
                .or_else(|| element.attribute(self.name_attribute()))
                .map(str::to_owned);
            (key, Value::text(element.text()))
        };

        tracing::trace!(path, key = ?key, "Extracted value");
        self.data.insert(key, value);
        Ok(())
    }

    /// The flat extraction map.
    #[must_use]
    pub fn data(&self) -> &Record {
        &self.data
    }

    /// Take the flat extraction map, leaving an empty one.
    pub fn take_data(&mut self) -> Record {
        std::mem::take(&mut self.data)
    }
}
