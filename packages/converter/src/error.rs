//! Error types for the converter.
//!
//! A single `ConvertError` enum covers every failure the library reports.
//! Variants fall into four kinds (see [`ErrorKind`]) so callers can tell a
//! broken input file from a bad navigation request or a bad path expression.

use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a [`ConvertError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source file is missing, unreadable or not well-formed XML.
    Parse,
    /// A cursor movement could not be performed.
    Navigation,
    /// A path expression did not resolve.
    Path,
    /// Rendering or writing output failed.
    Output,
}

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// No child matched the requested tag, name and occurrence.
    #[error("No child with tag {tag}{} at occurrence {occurrence} found", .name.as_ref().map(|n| format!("[{n}]")).unwrap_or_default())]
    ChildNotFound {
        tag: String,
        name: Option<String>,
        occurrence: usize,
    },

    /// Attempted to move above the document root.
    #[error("Already at root, cannot go to parent")]
    AtRoot,

    /// A segment of a path expression did not resolve.
    #[error("Element {segment} not found in path {path}")]
    PathNotFound { path: String, segment: String },

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl ConvertError {
    /// Return the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::XmlParse(_) => ErrorKind::Parse,
            Self::ChildNotFound { .. } | Self::AtRoot => ErrorKind::Navigation,
            Self::PathNotFound { .. } => ErrorKind::Path,
            Self::Io(_) | Self::Json(_) | Self::Yaml(_) => ErrorKind::Output,
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_not_found_with_name() {
        let err = ConvertError::ChildNotFound {
            tag: "ITEM".to_string(),
            name: Some("a".to_string()),
            occurrence: 1,
        };
        assert_eq!(
            err.to_string(),
            "No child with tag ITEM[a] at occurrence 1 found"
        );
        assert_eq!(err.kind(), ErrorKind::Navigation);
    }

    #[test]
    fn test_child_not_found_without_name() {
        let err = ConvertError::ChildNotFound {
            tag: "ITEM".to_string(),
            name: None,
            occurrence: 0,
        };
        assert_eq!(err.to_string(), "No child with tag ITEM at occurrence 0 found");
    }

    #[test]
    fn test_path_not_found_display() {
        let err = ConvertError::PathNotFound {
            path: "/ROOT/X".to_string(),
            segment: "X".to_string(),
        };
        assert!(err.to_string().contains("X not found"));
        assert_eq!(err.kind(), ErrorKind::Path);
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ConvertError::AtRoot.kind(), ErrorKind::Navigation);

        let read = ConvertError::Read {
            path: PathBuf::from("missing.pplx"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(read.kind(), ErrorKind::Parse);
        assert!(read.to_string().contains("missing.pplx"));
    }
}
