//! Cursor navigation over the document.

use super::{ElementInfo, TreeConverter};
use crate::error::{ConvertError, Result};
use crate::xml::{Element, PathSegment};

impl TreeConverter {
    /// Element under the cursor.
    #[must_use]
    pub fn cursor(&self) -> Element<'_> {
        self.document
            .get(self.cursor)
            .unwrap_or_else(|| self.document.root())
    }

    /// Tag, display name and text of the cursor element.
    #[must_use]
    pub fn current_info(&self) -> ElementInfo {
        ElementInfo::from_element(self.cursor(), self.name_attribute())
    }

    /// Navigation path from the root, joined with '/'.
    ///
    /// Starts with the root tag, followed by each child spec passed to
    /// [`go_to_child`](Self::go_to_child).
    #[must_use]
    pub fn current_path(&self) -> String {
        self.path.join("/")
    }

    /// Info for every direct child of the cursor element.
    #[must_use]
    pub fn child_info(&self) -> Vec<ElementInfo> {
        let name_attribute = self.name_attribute();
        self.cursor()
            .children()
            .map(|child| ElementInfo::from_element(child, name_attribute))
            .collect()
    }

    /// Move the cursor to a child.
    ///
    /// `spec` is `tag` or `tag[displayName]`; `occurrence` picks among
    /// several matching children (0-based).
    ///
    /// # Errors
    /// Returns `ChildNotFound` if fewer than `occurrence + 1` children match.
    /// The cursor does not move in that case.
    pub fn go_to_child(&mut self, spec: &str, occurrence: usize) -> Result<()> {
        let segment = PathSegment::parse(spec);
        let name_attribute = self.name_attribute();
        let target = self
            .cursor()
            .children()
            .filter(|child| segment.matches(*child, name_attribute))
            .nth(occurrence)
            .map(|child| child.id());

        let Some(id) = target else {
            return Err(ConvertError::ChildNotFound {
                tag: segment.tag,
                name: segment.name,
                occurrence,
            });
        };

        self.cursor = id;
        self.path.push(spec.to_string());
        Ok(())
    }

    /// Move the cursor to the parent of the current element.
    ///
    /// # Errors
    /// Returns `AtRoot` if the cursor is at the root element.
    pub fn go_to_parent(&mut self) -> Result<()> {
        let parent = self
            .cursor()
            .parent()
            .map(|parent| parent.id())
            .ok_or(ConvertError::AtRoot)?;

        self.cursor = parent;
        self.path.pop();
        Ok(())
    }

    /// Move the cursor back to the root.
    pub fn go_to_root(&mut self) {
        let root = self.document.root();
        self.cursor = root.id();
        self.path = vec![root.tag().to_string()];
    }
}
