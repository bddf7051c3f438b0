//! The serialized store document

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Notebook;

/// Root of the persisted blob: `{ "notebooks": [...] }`
///
/// There is no schema version; changing this shape breaks existing stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub notebooks: Vec<Notebook>,
}

impl StoreDocument {
    /// Parse a persisted blob; `None` yields an empty document
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(raw)?),
            _ => Ok(Self::default()),
        }
    }

    /// Serialize the whole collection
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_missing_blob_is_empty() {
        assert_eq!(StoreDocument::parse(None).unwrap(), StoreDocument::default());
        assert_eq!(StoreDocument::parse(Some("  ")).unwrap(), StoreDocument::default());
    }

    #[test]
    fn test_parse_legacy_layout() {
        let raw = r#"{
            "notebooks": [
                {
                    "id": "1712345678901",
                    "name": "Groceries",
                    "notes": [
                        {
                            "id": "1712345679000",
                            "title": "Milk",
                            "text": "2%",
                            "postedOn": "1712345679000",
                            "updatedOn": "1712345679000"
                        }
                    ]
                }
            ]
        }"#;

        let doc = StoreDocument::parse(Some(raw)).unwrap();
        assert_eq!(doc.notebooks.len(), 1);
        assert_eq!(doc.notebooks[0].name, "Groceries");
        assert_eq!(doc.notebooks[0].notes[0].title, "Milk");
        assert_eq!(doc.notebooks[0].notes[0].id.as_str(), "1712345679000");
    }

    #[test]
    fn test_parse_corrupt_blob_fails() {
        assert!(StoreDocument::parse(Some("{\"notebooks\": [")).is_err());
    }
}
