use super::serial::{SerialCounter, format_label};
use super::table::RelationTable;
use crate::catalog::Catalog;
use crate::error::AssignmentError;
use crate::graph::{GraphStore, NodeData, Placement};
use tracing::debug;

/// The relation table plus the label counters used when assignments create nodes.
#[derive(Debug, Clone, Default)]
pub struct RelationModel {
    table: RelationTable,
    serials: SerialCounter,
}

impl RelationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing table, seeding label counters from the physical store.
    pub fn from_table(table: RelationTable, physical: &GraphStore) -> Self {
        Self {
            table,
            serials: SerialCounter::from_store(physical),
        }
    }

    pub fn table(&self) -> &RelationTable {
        &self.table
    }

    pub fn serials(&self) -> &SerialCounter {
        &self.serials
    }

    /// Creates a physical node of `physical_kind_id` and binds it to the flow node.
    ///
    /// Every check runs before anything is touched, so a rejected assignment leaves the
    /// table, the physical store and the label counters exactly as they were.
    pub fn assign(
        &mut self,
        catalog: &Catalog,
        flow: &GraphStore,
        physical: &mut GraphStore,
        placement: &mut Placement,
        flow_node_id: &str,
        physical_kind_id: &str,
    ) -> Result<String, AssignmentError> {
        let flow_node = flow
            .node(flow_node_id)
            .ok_or_else(|| AssignmentError::FlowNodeNotFound(flow_node_id.to_string()))?;

        let flow_kind =
            catalog
                .flow_kind(&flow_node.kind_id)
                .ok_or_else(|| AssignmentError::UnknownFlowKind {
                    flow_node_id: flow_node_id.to_string(),
                    kind_id: flow_node.kind_id.clone(),
                })?;

        let physical_kind = catalog
            .physical_kind(physical_kind_id)
            .filter(|_| flow_kind.allows(physical_kind_id))
            .ok_or_else(|| AssignmentError::InvalidAssignment {
                flow_node_id: flow_node_id.to_string(),
                flow_kind_id: flow_kind.id.clone(),
                physical_kind_id: physical_kind_id.to_string(),
            })?;

        let serial = self
            .serials
            .next(&physical_kind.id)
            .ok_or_else(|| AssignmentError::SerialExhausted {
                kind_id: physical_kind.id.clone(),
            })?;
        let data = NodeData {
            label: format_label(&physical_kind.label, serial),
            icon: physical_kind.icon.clone(),
        };
        let physical_node_id = physical.add_node(&physical_kind.id, data, placement.next_position());
        self.table.link(flow_node_id, &physical_node_id);

        debug!(
            flow_node_id,
            physical_node_id = %physical_node_id,
            kind = %physical_kind.id,
            serial,
            "assigned physical node"
        );
        Ok(physical_node_id)
    }

    pub fn unassign(&mut self, flow_node_id: &str, physical_node_id: &str) -> bool {
        self.table.unassign(flow_node_id, physical_node_id)
    }

    pub fn relations_for(&self, flow_node_id: &str) -> &[String] {
        self.table.relations_for(flow_node_id)
    }

    pub fn relations_referencing(&self, physical_node_id: &str) -> Option<&str> {
        self.table.relations_referencing(physical_node_id)
    }

    pub fn on_flow_node_deleted(&mut self, flow_node_id: &str) -> bool {
        self.table.on_flow_node_deleted(flow_node_id).is_some()
    }

    pub fn on_physical_node_deleted(&mut self, physical_node_id: &str) -> Vec<String> {
        self.table.on_physical_node_deleted(physical_node_id)
    }

    /// Replaces the table after an import. Counters are raised to cover the imported
    /// labels but never lowered.
    pub(crate) fn replace(&mut self, table: RelationTable, physical: &GraphStore) {
        self.table = table;
        self.serials.observe_store(physical);
    }
}
