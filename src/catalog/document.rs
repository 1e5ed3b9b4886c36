//! In-memory view of a locale catalog.
//!
//! The catalog keeps the parsed object as an insertion-ordered
//! `serde_json::Map`, so sections and message keys are written back in the
//! order they were read. Serialization uses two-space indentation and leaves
//! non-ASCII text unescaped, which makes a load/save cycle byte-stable.

use crate::error::{CatalogError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Placeholder path reported for catalogs parsed from a string.
const INLINE_SOURCE: &str = "<inline>";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    sections: Map<String, Value>,
}

impl Catalog {
    /// Read and parse the catalog at `path`.
    ///
    /// The file is buffered fully before parsing; nothing is retained from a
    /// failed load.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(path, &text)?;
        debug!(
            path = %path.display(),
            sections = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse(Path::new(INLINE_SOURCE), text)
    }

    pub fn from_map(sections: Map<String, Value>) -> Self {
        Self { sections }
    }

    fn parse(path: &Path, text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        match value {
            Value::Object(sections) => Ok(Self { sections }),
            _ => Err(CatalogError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.sections.get_mut(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Assign `content` to `name`, returning the previous value if any.
    ///
    /// A new section is appended after the existing ones; an existing one
    /// keeps its position.
    pub fn set_section(&mut self, name: &str, content: Map<String, Value>) -> Option<Value> {
        self.sections
            .insert(name.to_string(), Value::Object(content))
    }

    /// Top-level section names in document order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.sections
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.sections
    }

    /// Render the catalog as it is written to disk: two-space indent,
    /// literal UTF-8, no trailing newline.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.sections)
    }

    /// Overwrite `path` with the serialized catalog.
    ///
    /// The write is a plain truncate-and-write; an I/O failure part way
    /// through can leave the file truncated.
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_error = |source: std::io::Error| CatalogError::Write {
            path: PathBuf::from(path),
            source,
        };
        let text = self
            .to_json_string()
            .map_err(|err| write_error(err.into()))?;
        fs::write(path, text.as_bytes()).map_err(write_error)?;
        debug!(path = %path.display(), bytes = text.len(), "saved catalog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn rejects_non_object_top_level() {
        let err = Catalog::from_json_str("[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(matches!(err, CatalogError::NotAnObject { .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalog::from_json_str("{\"common\": ").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn preserves_section_order() {
        let catalog =
            Catalog::from_json_str(r#"{"zones": {}, "common": {}, "clients": {}}"#).unwrap();
        let names: Vec<_> = catalog.section_names().collect();
        assert_eq!(names, vec!["zones", "common", "clients"]);
    }

    #[test]
    fn serializes_with_two_space_indent_and_literal_unicode() {
        let catalog = Catalog::from_map(
            json!({"common": {"loading": "Loading\u{2026}", "pin": "\u{1F4CC} Pinned"}})
                .as_object()
                .cloned()
                .unwrap(),
        );
        let text = catalog.to_json_string().unwrap();
        assert_eq!(
            text,
            "{\n  \"common\": {\n    \"loading\": \"Loading…\",\n    \"pin\": \"📌 Pinned\"\n  }\n}"
        );
    }

    #[test]
    fn empty_object_is_an_empty_catalog() {
        let catalog = Catalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.as_map(), &Map::new());
        assert_eq!(catalog.to_json_string().unwrap(), "{}");
    }

    #[test]
    fn set_section_keeps_position_of_existing_key() {
        let mut catalog = Catalog::from_json_str(r#"{"a": {}, "b": {}}"#).unwrap();
        let mut content = Map::new();
        content.insert("k".to_string(), json!("v"));
        let previous = catalog.set_section("a", content);
        assert_eq!(previous, Some(json!({})));
        let names: Vec<_> = catalog.section_names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
