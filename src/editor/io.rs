use super::Editor;
use crate::catalog::Catalog;
use crate::document::import::Sourced;
use crate::document::{DocumentKind, GraphDocument, ImportBundle, ImportSummary, to_pretty_json};
use crate::error::{ExportError, GraphError, ImportError};
use crate::graph::{GraphStore, View};
use crate::relation::RelationTable;
use tracing::{info, warn};

impl Editor {
    /// Applies an upload.
    ///
    /// Every document in the bundle is validated against the catalog before anything is
    /// replaced; one bad document rejects the whole bundle and leaves the editor untouched.
    /// Relations that point at nodes missing from the resulting graphs are dropped.
    pub fn import(&mut self, bundle: ImportBundle) -> Result<ImportSummary, ImportError> {
        let ImportBundle {
            flow,
            physical,
            relations,
        } = bundle;

        let flow = flow
            .map(|doc| validated_store(&self.catalog, View::Flow, doc))
            .transpose()?;
        let physical = physical
            .map(|doc| validated_store(&self.catalog, View::Physical, doc))
            .transpose()?;

        let mut summary = ImportSummary::default();
        if flow.is_some() {
            summary.replaced.push(DocumentKind::Flow);
        }
        if physical.is_some() {
            summary.replaced.push(DocumentKind::Physical);
        }

        let mut table = match relations {
            Some(sourced) => {
                summary.replaced.push(DocumentKind::Relation);
                RelationTable::from_relations(sourced.document)
            }
            None => self.relations.table().clone(),
        };

        {
            let flow_after = flow.as_ref().unwrap_or(&self.flow);
            let physical_after = physical.as_ref().unwrap_or(&self.physical);
            summary.pruned_references = table.retain_existing(
                |id| flow_after.contains(id),
                |id| physical_after.contains(id),
            );
        }
        if summary.pruned_references > 0 {
            warn!(
                pruned = summary.pruned_references,
                "dropped relations to nodes missing after import"
            );
        }

        if let Some(flow) = flow {
            self.flow = flow;
        }
        if let Some(physical) = physical {
            self.physical = physical;
        }
        self.relations.replace(table, &self.physical);

        self.workflow.close();
        self.highlight.clear();
        self.sync_emphasis();

        info!(
            replaced = ?summary.replaced,
            flow_nodes = self.flow.len(),
            physical_nodes = self.physical.len(),
            relations = self.relations.table().len(),
            "imported workspace"
        );
        Ok(summary)
    }

    pub fn flow_document(&self) -> GraphDocument {
        self.flow.to_document()
    }

    pub fn physical_document(&self) -> GraphDocument {
        self.physical.to_document()
    }

    /// Serializes one workspace document as pretty JSON.
    pub fn export_document(&self, kind: DocumentKind) -> Result<String, ExportError> {
        match kind {
            DocumentKind::Flow => to_pretty_json(kind, &self.flow_document()),
            DocumentKind::Physical => to_pretty_json(kind, &self.physical_document()),
            DocumentKind::Relation => to_pretty_json(kind, self.relations.table().entries()),
        }
    }
}

/// Structural checks plus a catalog lookup for every node kind.
fn validated_store(
    catalog: &Catalog,
    view: View,
    sourced: Sourced<GraphDocument>,
) -> Result<GraphStore, ImportError> {
    let Sourced {
        source_name,
        document,
    } = sourced;
    let malformed = |error: GraphError| ImportError::MalformedImport {
        document: DocumentKind::from(view),
        source_name: source_name.clone(),
        message: error.to_string(),
    };

    if let Some(node) = document
        .nodes
        .iter()
        .find(|n| catalog.kind(view, &n.kind_id).is_none())
    {
        return Err(malformed(GraphError::UnknownNodeKind {
            view,
            node_id: node.id.clone(),
            kind_id: node.kind_id.clone(),
        }));
    }

    GraphStore::from_document(view, document).map_err(malformed)
}
