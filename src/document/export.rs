use super::DocumentKind;
use crate::editor::Editor;
use crate::error::ExportError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths written by [`write_documents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDocuments {
    pub flow: PathBuf,
    pub physical: PathBuf,
    pub relation: PathBuf,
}

/// Serializes a document as pretty-printed JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(kind: DocumentKind, document: &T) -> Result<String, ExportError> {
    serde_json::to_string_pretty(document).map_err(|e| ExportError::Serialization {
        document: kind,
        message: e.to_string(),
    })
}

/// Writes `<stem>.flow`, `<stem>.physical` and `<stem>.relation` into `dir`.
///
/// All three documents are serialized before the first file is written.
pub fn write_documents(
    editor: &Editor,
    dir: &Path,
    stem: &str,
) -> Result<WrittenDocuments, ExportError> {
    let contents = DocumentKind::ALL
        .into_iter()
        .map(|kind| editor.export_document(kind).map(|json| (kind, json)))
        .collect::<Result<Vec<_>, _>>()?;

    fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    for (kind, json) in &contents {
        let path = kind.path_in(dir, stem);
        fs::write(&path, json).map_err(|e| ExportError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    }

    let written = WrittenDocuments {
        flow: DocumentKind::Flow.path_in(dir, stem),
        physical: DocumentKind::Physical.path_in(dir, stem),
        relation: DocumentKind::Relation.path_in(dir, stem),
    };
    info!(dir = %dir.display(), stem, "wrote workspace documents");
    Ok(written)
}
