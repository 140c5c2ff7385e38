//! PPLX converter - fold O-Calc project files into nested key-value data.
//!
//! An XML document is parsed once and folded element by element. Each tag can
//! have its own [`FoldStrategy`]; tags without one use the default fold, which
//! turns children with repeated tags into a list of `{name, data}` records and
//! children with distinct tags into a mapping keyed by display name.
//!
//! # Example
//!
//! ```
//! use pplx_converter::{create_default_registry, TreeConverter};
//!
//! let xml = r#"<ROOT><ITEM NAME="a">1</ITEM><ITEM NAME="b">2</ITEM></ROOT>"#;
//! let mut converter = TreeConverter::from_xml(xml, create_default_registry("NAME"))?;
//!
//! let json = serde_json::to_string(&converter.convert())?;
//! assert_eq!(json, r#"{"ROOT":[{"name":"a","data":"1"},{"name":"b","data":"2"}]}"#);
//!
//! converter.add_to_data("/ROOT/ITEM[b]", None)?;
//! assert_eq!(converter.data().get("b").and_then(|v| v.as_text()), Some("2"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and conversion options
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Owned element tree and path segments
//! - [`value`]: The converted structure
//! - [`strategy`]: Tag-keyed fold strategies
//! - [`engine`]: Default fold and strategy dispatch
//! - [`converter`]: Tree converter with navigation and extraction
//! - [`output`]: JSON/YAML rendering
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod converter;
pub mod engine;
pub mod error;
pub mod output;
pub mod strategy;
pub mod value;
pub mod xml;

// Re-export commonly used items
pub use config::{ConvertOptions, LeafMode};
pub use converter::{ElementInfo, TreeConverter};
pub use engine::FoldEngine;
pub use error::{ConvertError, ErrorKind, Result};
pub use strategy::{create_default_registry, AttributeStrategy, FoldStrategy, StrategyRegistry};
pub use value::{Entry, Record, Value};
