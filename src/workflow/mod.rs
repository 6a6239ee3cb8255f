//! The assignment dialog opened by double-clicking a flow node.
//!
//! The workflow itself only tracks whether the dialog is open and for which flow node.
//! Every add/remove action goes straight to the relation model, so closing the dialog
//! never discards anything.

use crate::catalog::{Catalog, NodeKind};
use crate::graph::{GraphStore, Position};
use crate::relation::RelationTable;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AssignmentWorkflow {
    #[default]
    Closed,
    Open {
        flow_node_id: String,
        anchor: Position,
    },
}

impl AssignmentWorkflow {
    pub fn open(&mut self, flow_node_id: &str, anchor: Position) {
        *self = AssignmentWorkflow::Open {
            flow_node_id: flow_node_id.to_string(),
            anchor,
        };
    }

    pub fn close(&mut self) {
        *self = AssignmentWorkflow::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, AssignmentWorkflow::Open { .. })
    }

    pub fn flow_node_id(&self) -> Option<&str> {
        match self {
            AssignmentWorkflow::Open { flow_node_id, .. } => Some(flow_node_id.as_str()),
            AssignmentWorkflow::Closed => None,
        }
    }

    pub fn anchor(&self) -> Option<Position> {
        match self {
            AssignmentWorkflow::Open { anchor, .. } => Some(*anchor),
            AssignmentWorkflow::Closed => None,
        }
    }

    /// Closes the dialog if it belongs to the given flow node.
    pub fn close_for(&mut self, flow_node_id: &str) -> bool {
        if self.flow_node_id() == Some(flow_node_id) {
            self.close();
            return true;
        }
        false
    }
}

/// A physical node currently bound to the dialog's flow node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedNode<'a> {
    pub id: &'a str,
    pub kind_id: &'a str,
    pub label: &'a str,
    pub icon: Option<&'a str>,
}

/// Everything the dialog shows while open.
#[derive(Debug, Clone)]
pub struct AssignmentPanel<'a> {
    pub flow_node_id: &'a str,
    pub flow_label: &'a str,
    pub flow_kind: &'a NodeKind,
    pub anchor: Position,
    /// Physical kinds offered by the "Add" actions.
    pub allowed_kinds: Vec<&'a NodeKind>,
    /// Current associations, resolved against the physical store. Ids that no longer
    /// resolve are skipped.
    pub assigned: Vec<AssignedNode<'a>>,
}

impl<'a> AssignmentPanel<'a> {
    /// Resolves the panel for an open workflow. Returns `None` if the workflow is closed
    /// or its flow node (or that node's kind) no longer exists.
    pub fn resolve(
        workflow: &'a AssignmentWorkflow,
        catalog: &'a Catalog,
        flow: &'a GraphStore,
        physical: &'a GraphStore,
        relations: &'a RelationTable,
    ) -> Option<Self> {
        let AssignmentWorkflow::Open {
            flow_node_id,
            anchor,
        } = workflow
        else {
            return None;
        };

        let flow_node = flow.node(flow_node_id)?;
        let flow_kind = catalog.flow_kind(&flow_node.kind_id)?;

        let assigned = relations
            .relations_for(flow_node_id)
            .iter()
            .filter_map(|id| physical.node(id))
            .map(|node| AssignedNode {
                id: &node.id,
                kind_id: &node.kind_id,
                label: node.label(),
                icon: node.icon(),
            })
            .collect();

        Some(Self {
            flow_node_id: flow_node_id.as_str(),
            flow_label: flow_node.label(),
            flow_kind,
            anchor: *anchor,
            allowed_kinds: catalog.allowed_physical_kinds(&flow_kind.id),
            assigned,
        })
    }

    pub fn is_assigned(&self, physical_node_id: &str) -> bool {
        self.assigned.iter().any(|n| n.id == physical_node_id)
    }
}
