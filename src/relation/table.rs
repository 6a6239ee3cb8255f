use serde::{Deserialize, Serialize};
use tracing::debug;

/// The physical nodes associated with one flow node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub flow_node_id: String,
    pub physical_node_ids: Vec<String>,
}

impl Relation {
    pub fn new(flow_node_id: impl Into<String>) -> Self {
        Self {
            flow_node_id: flow_node_id.into(),
            physical_node_ids: Vec::new(),
        }
    }

    pub fn contains(&self, physical_node_id: &str) -> bool {
        self.physical_node_ids.iter().any(|id| id == physical_node_id)
    }
}

/// Flow -> physical association table.
///
/// Invariants kept by every method:
/// - at most one entry per flow node id,
/// - no duplicate physical ids inside an entry,
/// - no entry with an empty physical id list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationTable {
    entries: Vec<Relation>,
}

impl RelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from raw relation records, merging entries of the same flow node,
    /// dropping repeated physical ids and discarding empty entries.
    pub fn from_relations(relations: impl IntoIterator<Item = Relation>) -> Self {
        let mut table = Self::new();
        for relation in relations {
            for physical_node_id in &relation.physical_node_ids {
                table.link(&relation.flow_node_id, physical_node_id);
            }
        }
        table
    }

    pub fn entries(&self) -> &[Relation] {
        &self.entries
    }

    pub fn to_relations(&self) -> Vec<Relation> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, flow_node_id: &str) -> Option<&Relation> {
        self.entries.iter().find(|r| r.flow_node_id == flow_node_id)
    }

    /// Physical ids associated with a flow node; empty when there is no entry.
    pub fn relations_for(&self, flow_node_id: &str) -> &[String] {
        self.entry(flow_node_id)
            .map(|r| r.physical_node_ids.as_slice())
            .unwrap_or_default()
    }

    /// The first flow node whose entry contains the physical node.
    pub fn relations_referencing(&self, physical_node_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.contains(physical_node_id))
            .map(|r| r.flow_node_id.as_str())
    }

    pub fn contains(&self, flow_node_id: &str, physical_node_id: &str) -> bool {
        self.entry(flow_node_id)
            .is_some_and(|r| r.contains(physical_node_id))
    }

    /// Adds an association, creating the entry if needed. Returns `false` if it already
    /// existed.
    pub fn link(&mut self, flow_node_id: &str, physical_node_id: &str) -> bool {
        let index = match self
            .entries
            .iter()
            .position(|r| r.flow_node_id == flow_node_id)
        {
            Some(index) => index,
            None => {
                self.entries.push(Relation::new(flow_node_id));
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[index];
        if entry.contains(physical_node_id) {
            return false;
        }
        entry.physical_node_ids.push(physical_node_id.to_string());
        debug!(flow_node_id, physical_node_id, "linked nodes");
        true
    }

    /// Removes an association, pruning the entry once it is empty. Unknown pairs are a
    /// no-op; returns whether anything was removed.
    pub fn unassign(&mut self, flow_node_id: &str, physical_node_id: &str) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|r| r.flow_node_id == flow_node_id)
        else {
            return false;
        };

        let entry = &mut self.entries[index];
        let before = entry.physical_node_ids.len();
        entry.physical_node_ids.retain(|id| id != physical_node_id);
        let removed = entry.physical_node_ids.len() != before;
        if entry.physical_node_ids.is_empty() {
            self.entries.remove(index);
        }
        if removed {
            debug!(flow_node_id, physical_node_id, "unlinked nodes");
        }
        removed
    }

    /// Drops the whole entry of a deleted flow node.
    pub fn on_flow_node_deleted(&mut self, flow_node_id: &str) -> Option<Relation> {
        let index = self
            .entries
            .iter()
            .position(|r| r.flow_node_id == flow_node_id)?;
        Some(self.entries.remove(index))
    }

    /// Removes a deleted physical node from every entry. Returns the flow node ids whose
    /// entries changed.
    pub fn on_physical_node_deleted(&mut self, physical_node_id: &str) -> Vec<String> {
        let mut affected = Vec::new();
        for entry in &mut self.entries {
            let before = entry.physical_node_ids.len();
            entry.physical_node_ids.retain(|id| id != physical_node_id);
            if entry.physical_node_ids.len() != before {
                affected.push(entry.flow_node_id.clone());
            }
        }
        self.prune_empty();
        affected
    }

    /// Drops every id the predicates reject, pruning entries left empty. Returns the number
    /// of dropped references.
    pub fn retain_existing(
        &mut self,
        flow_exists: impl Fn(&str) -> bool,
        physical_exists: impl Fn(&str) -> bool,
    ) -> usize {
        let mut dropped = 0;
        self.entries.retain(|entry| {
            let keep = flow_exists(entry.flow_node_id.as_str());
            if !keep {
                dropped += entry.physical_node_ids.len();
            }
            keep
        });
        for entry in &mut self.entries {
            let before = entry.physical_node_ids.len();
            entry.physical_node_ids.retain(|id| physical_exists(id.as_str()));
            dropped += before - entry.physical_node_ids.len();
        }
        self.prune_empty();
        dropped
    }

    fn prune_empty(&mut self) {
        self.entries.retain(|r| !r.physical_node_ids.is_empty());
    }
}
