//! Derives which nodes of both views are emphasized or dimmed.
//!
//! The controller remembers *what* the user is pointing at (its [`Focus`]) and derives the
//! [`HighlightState`] from that focus and the current relation table. Because the state
//! is always recomputed from the table, calling [`HighlightController::refresh`] after a
//! relation change is enough to drop associations that no longer exist.

use crate::graph::{Emphasis, GraphStore, View};
use crate::relation::RelationTable;
use tracing::trace;

/// What the pointer (or a double-click) is currently focused on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Idle,
    FlowHovered(String),
    PhysicalHovered(String),
}

impl Focus {
    pub fn node(&self) -> Option<(View, &str)> {
        match self {
            Focus::Idle => None,
            Focus::FlowHovered(id) => Some((View::Flow, id.as_str())),
            Focus::PhysicalHovered(id) => Some((View::Physical, id.as_str())),
        }
    }
}

/// The active association context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightState {
    pub active_flow_node_id: Option<String>,
    pub active_physical_ids: Vec<String>,
}

impl HighlightState {
    pub fn is_idle(&self) -> bool {
        self.active_flow_node_id.is_none() && self.active_physical_ids.is_empty()
    }

    pub fn is_active_physical(&self, physical_node_id: &str) -> bool {
        self.active_physical_ids.iter().any(|id| id == physical_node_id)
    }

    /// Emphasis of a node in the given view under this state.
    pub fn emphasis(&self, view: View, node_id: &str) -> Emphasis {
        let Some(active_flow) = self.active_flow_node_id.as_deref() else {
            return Emphasis::NONE;
        };
        let highlighted = match view {
            View::Flow => node_id == active_flow,
            View::Physical => self.is_active_physical(node_id),
        };
        Emphasis {
            highlighted,
            dimmed: !highlighted,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HighlightController {
    focus: Focus,
    state: HighlightState,
}

impl HighlightController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    pub fn hover_flow(&mut self, flow_node_id: &str, relations: &RelationTable) {
        self.focus = Focus::FlowHovered(flow_node_id.to_string());
        self.refresh(relations);
    }

    pub fn hover_physical(&mut self, physical_node_id: &str, relations: &RelationTable) {
        self.focus = Focus::PhysicalHovered(physical_node_id.to_string());
        self.refresh(relations);
    }

    pub fn hover(&mut self, view: View, node_id: &str, relations: &RelationTable) {
        match view {
            View::Flow => self.hover_flow(node_id, relations),
            View::Physical => self.hover_physical(node_id, relations),
        }
    }

    /// Pointer left a node. Only the node currently in focus returns the controller to
    /// idle, so a late leave event of a previous node cannot clear a newer hover.
    pub fn leave(&mut self, view: View, node_id: &str) {
        if self.focus.node() == Some((view, node_id)) {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.focus = Focus::Idle;
        self.state = HighlightState::default();
    }

    /// A node was deleted; drop the focus if it pointed at it.
    pub fn forget(&mut self, view: View, node_id: &str, relations: &RelationTable) {
        if self.focus.node() == Some((view, node_id)) {
            self.clear();
        } else {
            self.refresh(relations);
        }
    }

    /// Recomputes the state from the current focus and relation table.
    pub fn refresh(&mut self, relations: &RelationTable) {
        self.state = match &self.focus {
            Focus::Idle => HighlightState::default(),
            Focus::FlowHovered(flow_node_id) => HighlightState {
                active_flow_node_id: Some(flow_node_id.clone()),
                active_physical_ids: relations.relations_for(flow_node_id).to_vec(),
            },
            Focus::PhysicalHovered(physical_node_id) => {
                match relations.relations_referencing(physical_node_id) {
                    Some(flow_node_id) => HighlightState {
                        active_flow_node_id: Some(flow_node_id.to_string()),
                        active_physical_ids: relations.relations_for(flow_node_id).to_vec(),
                    },
                    None => HighlightState::default(),
                }
            }
        };
        trace!(focus = ?self.focus, state = ?self.state, "highlight refreshed");
    }

    /// Writes the emphasis flags of the current state into both stores.
    pub fn apply(&self, flow: &mut GraphStore, physical: &mut GraphStore) {
        flow.apply_emphasis(|node| self.state.emphasis(View::Flow, &node.id));
        physical.apply_emphasis(|node| self.state.emphasis(View::Physical, &node.id));
    }
}
