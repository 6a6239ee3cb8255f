//! The three workspace documents and their file conventions.
//!
//! A workspace is saved as three independent JSON files sharing a stem:
//! `<stem>.flow` and `<stem>.physical` hold `{ "nodes": [...], "edges": [...] }`, and
//! `<stem>.relation` holds `[{ "flowNodeId": ..., "physicalNodeIds": [...] }]`.

pub mod export;
pub mod import;

pub use export::{WrittenDocuments, to_pretty_json, write_documents};
pub use import::{ImportBundle, ImportSummary};

use crate::graph::{GraphEdge, GraphNode, View};
use crate::relation::Relation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Stem used by the editor when none is given.
pub const DEFAULT_STEM: &str = "Genba";

/// Node/edge document of one view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

pub type RelationDocument = Vec<Relation>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Flow,
    Physical,
    Relation,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Flow,
        DocumentKind::Physical,
        DocumentKind::Relation,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Flow => "flow",
            DocumentKind::Physical => "physical",
            DocumentKind::Relation => "relation",
        }
    }

    /// Classifies a file by its suffix, e.g. `Genba.physical`.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        Self::ALL.into_iter().find(|k| k.extension() == extension)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(Self::from_file_name)
    }

    /// The graph view a document describes, if any.
    pub fn view(self) -> Option<View> {
        match self {
            DocumentKind::Flow => Some(View::Flow),
            DocumentKind::Physical => Some(View::Physical),
            DocumentKind::Relation => None,
        }
    }

    pub fn file_name(self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }

    pub fn path_in(self, dir: &Path, stem: &str) -> PathBuf {
        dir.join(self.file_name(stem))
    }
}

impl From<View> for DocumentKind {
    fn from(view: View) -> Self {
        match view {
            View::Flow => DocumentKind::Flow,
            View::Physical => DocumentKind::Physical,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
