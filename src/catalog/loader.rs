use super::{Catalog, NodeKind};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub flow_kinds: Vec<NodeKind>,
    pub physical_kinds: Vec<NodeKind>,
}

impl Catalog {
    /// Parses and validates a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::new(document.flow_kinds, document.physical_kinds)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            flow_kinds: self.flow_kinds.clone(),
            physical_kinds: self.physical_kinds.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(&self.to_document())
            .map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }
}
