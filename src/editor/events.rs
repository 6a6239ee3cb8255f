use super::Editor;
use crate::document::{ImportBundle, ImportSummary};
use crate::error::EditorError;
use crate::graph::{Position, View};
use tracing::trace;

/// Where a click landed.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickTarget {
    Node { view: View, node_id: String },
    /// Empty canvas area of a view.
    Canvas { view: View, position: Position },
    /// Inside the assignment dialog.
    Modal,
    /// Anywhere else: header, sidebar, page background.
    Chrome,
}

impl ClickTarget {
    /// Clicks outside every node and outside the dialog return the highlight to idle.
    pub fn clears_highlight(&self) -> bool {
        matches!(self, ClickTarget::Canvas { .. } | ClickTarget::Chrome)
    }

    /// Clicks that dismiss the assignment dialog. Clicking a node keeps it open so the
    /// user can inspect the graph while assigning.
    pub fn dismisses_assignment(&self) -> bool {
        match self {
            ClickTarget::Canvas { .. } | ClickTarget::Chrome => true,
            ClickTarget::Node { .. } | ClickTarget::Modal => false,
        }
    }

    pub fn view(&self) -> Option<View> {
        match self {
            ClickTarget::Node { view, .. } | ClickTarget::Canvas { view, .. } => Some(*view),
            ClickTarget::Modal | ClickTarget::Chrome => None,
        }
    }
}

/// Input from the presentation layer. Nodes are referenced by view and id, never through
/// callbacks bound to a particular node.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    PointerEnter { view: View, node_id: String },
    PointerLeave { view: View, node_id: String },
    CanvasEnter { view: View },
    Click(ClickTarget),
    DoubleClick {
        view: View,
        node_id: String,
        anchor: Position,
    },
    Connect {
        view: View,
        source: String,
        target: String,
    },
    MoveNode {
        view: View,
        node_id: String,
        position: Position,
    },
    DeleteNode { view: View, node_id: String },
    DeleteEdge { view: View, edge_id: String },
    SelectKind { view: View, kind_id: String },
    /// "Add" in the assignment dialog.
    Assign { physical_kind_id: String },
    /// "Remove" in the assignment dialog.
    Unassign { physical_node_id: String },
    CloseAssignment,
    Upload(ImportBundle),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Handled,
    /// The event referenced something that does not exist and changed nothing.
    Ignored,
    NodeCreated { view: View, node_id: String },
    EdgeCreated { view: View, edge_id: String },
    Assigned { physical_node_id: String },
    Imported(ImportSummary),
}

impl Editor {
    /// Routes one presentation event to the operation it stands for.
    pub fn dispatch(&mut self, event: EditorEvent) -> Result<EventOutcome, EditorError> {
        trace!(?event, "dispatching");
        let outcome = match event {
            EditorEvent::PointerEnter { view, node_id } => {
                self.hover(view, &node_id);
                EventOutcome::Handled
            }
            EditorEvent::PointerLeave { view, node_id } => {
                self.leave(view, &node_id);
                EventOutcome::Handled
            }
            EditorEvent::CanvasEnter { .. } => {
                self.clear_highlight();
                EventOutcome::Handled
            }
            EditorEvent::Click(target) => self.on_click(target)?,
            EditorEvent::DoubleClick {
                view,
                node_id,
                anchor,
            } => self.on_double_click(view, &node_id, anchor)?,
            EditorEvent::Connect {
                view,
                source,
                target,
            } => {
                let edge_id = self.connect(view, &source, &target)?;
                EventOutcome::EdgeCreated { view, edge_id }
            }
            EditorEvent::MoveNode {
                view,
                node_id,
                position,
            } => {
                self.move_node(view, &node_id, position)?;
                EventOutcome::Handled
            }
            EditorEvent::DeleteNode { view, node_id } => handled_if(self.delete_node(view, &node_id)),
            EditorEvent::DeleteEdge { view, edge_id } => handled_if(self.delete_edge(view, &edge_id)),
            EditorEvent::SelectKind { view, kind_id } => {
                self.select_kind(view, &kind_id)?;
                EventOutcome::Handled
            }
            EditorEvent::Assign { physical_kind_id } => {
                let physical_node_id = self.add_assignment(&physical_kind_id)?;
                EventOutcome::Assigned { physical_node_id }
            }
            EditorEvent::Unassign { physical_node_id } => {
                handled_if(self.remove_assignment(&physical_node_id)?)
            }
            EditorEvent::CloseAssignment => {
                self.close_assignment();
                EventOutcome::Handled
            }
            EditorEvent::Upload(bundle) => EventOutcome::Imported(self.import(bundle)?),
        };
        Ok(outcome)
    }

    /// Highlight clearing and dialog dismissal are independent listeners with their own
    /// predicates; a canvas click then also creates a node of the selected kind.
    fn on_click(&mut self, target: ClickTarget) -> Result<EventOutcome, EditorError> {
        if let Some(view) = target.view() {
            self.set_active_view(view);
        }
        if target.clears_highlight() {
            self.clear_highlight();
        }
        if target.dismisses_assignment() {
            self.close_assignment();
        }

        match target {
            ClickTarget::Canvas { view, position } => {
                let node_id = self.place_node(view, position)?;
                Ok(EventOutcome::NodeCreated { view, node_id })
            }
            _ => Ok(EventOutcome::Handled),
        }
    }

    fn on_double_click(
        &mut self,
        view: View,
        node_id: &str,
        anchor: Position,
    ) -> Result<EventOutcome, EditorError> {
        if !self.graph(view).contains(node_id) {
            return Ok(EventOutcome::Ignored);
        }
        match view {
            View::Flow => self.open_assignment(node_id, anchor)?,
            View::Physical => {
                if self.relations_referencing(node_id).is_some() {
                    self.hover(View::Physical, node_id);
                }
            }
        }
        Ok(EventOutcome::Handled)
    }
}

fn handled_if(changed: bool) -> EventOutcome {
    if changed {
        EventOutcome::Handled
    } else {
        EventOutcome::Ignored
    }
}
