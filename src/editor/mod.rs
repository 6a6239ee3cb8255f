//! The editor: both graphs, the relation model, and the interaction state around them.
//!
//! All state is owned by one [`Editor`] and mutated through `&mut self`, one event at a
//! time. Every operation that changes relations or removes nodes re-derives the highlight
//! before returning, so the emphasis flags read back from the stores are never stale.

mod builder;
mod events;
mod io;

pub use builder::EditorBuilder;
pub use events::{ClickTarget, EditorEvent, EventOutcome};

use crate::catalog::{Catalog, NodeKind};
use crate::error::{AssignmentError, GraphError};
use crate::graph::{GraphNode, GraphStore, NodeData, Placement, PlacementBounds, Position, View};
use crate::highlight::{Focus, HighlightController, HighlightState};
use crate::relation::{RelationModel, RelationTable};
use crate::workflow::{AssignmentPanel, AssignmentWorkflow};
use tracing::debug;

/// Read-only summary of a node and its kind, as shown in the node context window.
#[derive(Debug, Clone)]
pub struct NodeDetails<'a> {
    pub view: View,
    pub node: &'a GraphNode,
    /// `None` if the node's kind is not in the catalog.
    pub kind: Option<&'a NodeKind>,
    /// Nodes on the other side of the relation table.
    pub related: Vec<&'a GraphNode>,
}

impl NodeDetails<'_> {
    pub fn has_input(&self) -> bool {
        self.kind.is_some_and(|k| k.has_input)
    }

    pub fn has_output(&self) -> bool {
        self.kind.is_some_and(|k| k.has_output)
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    catalog: Catalog,
    flow: GraphStore,
    physical: GraphStore,
    relations: RelationModel,
    highlight: HighlightController,
    workflow: AssignmentWorkflow,
    selected_flow_kind: Option<String>,
    selected_physical_kind: Option<String>,
    active_view: View,
    placement: Placement,
}

impl Editor {
    pub fn builder() -> EditorBuilder {
        EditorBuilder::new()
    }

    /// An empty editor over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self::assemble(
            catalog,
            GraphStore::new(View::Flow),
            GraphStore::new(View::Physical),
            Placement::new(PlacementBounds::default()),
        )
    }

    pub(crate) fn assemble(
        catalog: Catalog,
        flow: GraphStore,
        physical: GraphStore,
        placement: Placement,
    ) -> Self {
        let selected_flow_kind = catalog.kinds(View::Flow).first().map(|k| k.id.clone());
        let selected_physical_kind = catalog.kinds(View::Physical).first().map(|k| k.id.clone());
        let relations = RelationModel::from_table(RelationTable::new(), &physical);
        Self {
            catalog,
            flow,
            physical,
            relations,
            highlight: HighlightController::new(),
            workflow: AssignmentWorkflow::Closed,
            selected_flow_kind,
            selected_physical_kind,
            active_view: View::Flow,
            placement,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn flow(&self) -> &GraphStore {
        &self.flow
    }

    pub fn physical(&self) -> &GraphStore {
        &self.physical
    }

    pub fn graph(&self, view: View) -> &GraphStore {
        match view {
            View::Flow => &self.flow,
            View::Physical => &self.physical,
        }
    }

    fn graph_mut(&mut self, view: View) -> &mut GraphStore {
        match view {
            View::Flow => &mut self.flow,
            View::Physical => &mut self.physical,
        }
    }

    pub fn relations(&self) -> &RelationTable {
        self.relations.table()
    }

    pub fn relation_model(&self) -> &RelationModel {
        &self.relations
    }

    pub fn relations_for(&self, flow_node_id: &str) -> &[String] {
        self.relations.relations_for(flow_node_id)
    }

    pub fn relations_referencing(&self, physical_node_id: &str) -> Option<&str> {
        self.relations.relations_referencing(physical_node_id)
    }

    pub fn highlight(&self) -> &HighlightState {
        self.highlight.state()
    }

    pub fn focus(&self) -> &Focus {
        self.highlight.focus()
    }

    pub fn workflow(&self) -> &AssignmentWorkflow {
        &self.workflow
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn set_active_view(&mut self, view: View) {
        self.active_view = view;
    }

    /// The kind new canvas nodes of a view are created with.
    pub fn selected_kind(&self, view: View) -> Option<&NodeKind> {
        let selected = match view {
            View::Flow => self.selected_flow_kind.as_deref(),
            View::Physical => self.selected_physical_kind.as_deref(),
        }?;
        self.catalog.kind(view, selected)
    }

    pub fn select_kind(&mut self, view: View, kind_id: &str) -> Result<(), GraphError> {
        self.require_kind(view, kind_id)?;
        let slot = match view {
            View::Flow => &mut self.selected_flow_kind,
            View::Physical => &mut self.selected_physical_kind,
        };
        *slot = Some(kind_id.to_string());
        Ok(())
    }

    /// Creates a node of `kind_id` labelled with the kind's label.
    pub fn add_node(
        &mut self,
        view: View,
        kind_id: &str,
        position: Position,
    ) -> Result<String, GraphError> {
        let kind = self.require_kind(view, kind_id)?;
        let data = NodeData {
            label: kind.label.clone(),
            icon: kind.icon.clone(),
        };
        let kind_id = kind.id.clone();
        let node_id = self.graph_mut(view).add_node(&kind_id, data, position);
        self.sync_emphasis();
        Ok(node_id)
    }

    /// Creates a node of the view's selected kind, as a click on empty canvas does.
    pub fn place_node(&mut self, view: View, position: Position) -> Result<String, GraphError> {
        let kind_id = self
            .selected_kind(view)
            .map(|k| k.id.clone())
            .ok_or(GraphError::NoKindSelected { view })?;
        self.add_node(view, &kind_id, position)
    }

    pub fn connect(&mut self, view: View, source: &str, target: &str) -> Result<String, GraphError> {
        self.graph_mut(view).connect(source, target)
    }

    pub fn move_node(&mut self, view: View, node_id: &str, position: Position) -> Result<(), GraphError> {
        self.graph_mut(view).move_node(node_id, position)
    }

    pub fn delete_edge(&mut self, view: View, edge_id: &str) -> bool {
        self.graph_mut(view).remove_edge(edge_id).is_some()
    }

    /// Deletes a node and cascades the deletion into the relation table, the highlight and
    /// the assignment dialog. Returns `false` if the node did not exist.
    pub fn delete_node(&mut self, view: View, node_id: &str) -> bool {
        if self.graph_mut(view).remove_node(node_id).is_none() {
            return false;
        }

        match view {
            View::Flow => {
                self.relations.on_flow_node_deleted(node_id);
                self.workflow.close_for(node_id);
            }
            View::Physical => {
                let affected = self.relations.on_physical_node_deleted(node_id);
                debug!(node_id, affected = affected.len(), "pruned physical node from relations");
            }
        }

        self.highlight.forget(view, node_id, self.relations.table());
        self.sync_emphasis();
        true
    }

    /// Creates a physical node of `physical_kind_id` and associates it with the flow node.
    /// On success the flow node's associations become the highlighted context.
    pub fn assign(
        &mut self,
        flow_node_id: &str,
        physical_kind_id: &str,
    ) -> Result<String, AssignmentError> {
        let physical_node_id = self.relations.assign(
            &self.catalog,
            &self.flow,
            &mut self.physical,
            &mut self.placement,
            flow_node_id,
            physical_kind_id,
        )?;
        self.highlight.hover_flow(flow_node_id, self.relations.table());
        self.sync_emphasis();
        Ok(physical_node_id)
    }

    /// Removes an association. Missing associations are a no-op.
    pub fn unassign(&mut self, flow_node_id: &str, physical_node_id: &str) -> bool {
        let removed = self.relations.unassign(flow_node_id, physical_node_id);
        self.highlight.refresh(self.relations.table());
        self.sync_emphasis();
        removed
    }

    /// Opens the assignment dialog for a flow node, pre-highlighting its associations.
    pub fn open_assignment(
        &mut self,
        flow_node_id: &str,
        anchor: Position,
    ) -> Result<(), AssignmentError> {
        if !self.flow.contains(flow_node_id) {
            return Err(AssignmentError::FlowNodeNotFound(flow_node_id.to_string()));
        }
        self.workflow.open(flow_node_id, anchor);
        if !self.relations.relations_for(flow_node_id).is_empty() {
            self.highlight.hover_flow(flow_node_id, self.relations.table());
            self.sync_emphasis();
        }
        debug!(flow_node_id, "opened assignment dialog");
        Ok(())
    }

    pub fn close_assignment(&mut self) {
        self.workflow.close();
    }

    /// The dialog contents, if the dialog is open.
    pub fn assignment_panel(&self) -> Option<AssignmentPanel<'_>> {
        AssignmentPanel::resolve(
            &self.workflow,
            &self.catalog,
            &self.flow,
            &self.physical,
            self.relations.table(),
        )
    }

    /// The dialog's "Add" action.
    pub fn add_assignment(&mut self, physical_kind_id: &str) -> Result<String, AssignmentError> {
        let flow_node_id = self.open_flow_node()?;
        self.assign(&flow_node_id, physical_kind_id)
    }

    /// The dialog's "Remove" action.
    pub fn remove_assignment(&mut self, physical_node_id: &str) -> Result<bool, AssignmentError> {
        let flow_node_id = self.open_flow_node()?;
        Ok(self.unassign(&flow_node_id, physical_node_id))
    }

    /// Pointer entered a node. Hovering an id the view does not contain degrades to idle.
    pub fn hover(&mut self, view: View, node_id: &str) {
        if self.graph(view).contains(node_id) {
            self.highlight.hover(view, node_id, self.relations.table());
        } else {
            self.highlight.clear();
        }
        self.sync_emphasis();
    }

    pub fn leave(&mut self, view: View, node_id: &str) {
        self.highlight.leave(view, node_id);
        self.sync_emphasis();
    }

    pub fn clear_highlight(&mut self) {
        self.highlight.clear();
        self.sync_emphasis();
    }

    pub fn node_details(&self, view: View, node_id: &str) -> Option<NodeDetails<'_>> {
        let node = self.graph(view).node(node_id)?;
        let related: Vec<&GraphNode> = match view {
            View::Flow => self
                .relations
                .relations_for(node_id)
                .iter()
                .filter_map(|id| self.physical.node(id))
                .collect(),
            View::Physical => self
                .relations
                .table()
                .entries()
                .iter()
                .filter(|r| r.contains(node_id))
                .filter_map(|r| self.flow.node(&r.flow_node_id))
                .collect(),
        };
        Some(NodeDetails {
            view,
            node,
            kind: self.catalog.kind(view, &node.kind_id),
            related,
        })
    }

    fn open_flow_node(&self) -> Result<String, AssignmentError> {
        self.workflow
            .flow_node_id()
            .map(str::to_string)
            .ok_or(AssignmentError::WorkflowClosed)
    }

    fn require_kind(&self, view: View, kind_id: &str) -> Result<&NodeKind, GraphError> {
        self.catalog
            .kind(view, kind_id)
            .ok_or_else(|| GraphError::UnknownKind {
                view,
                kind_id: kind_id.to_string(),
            })
    }

    fn sync_emphasis(&mut self) {
        self.highlight.apply(&mut self.flow, &mut self.physical);
    }
}
