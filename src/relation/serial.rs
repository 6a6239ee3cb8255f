use crate::graph::GraphStore;
use ahash::AHashMap;

/// Per-kind running counters for assigned node labels.
///
/// Counters only move forward: deleting `Warehouse-001` does not make `001` available
/// again, so within a session a label is never issued twice for the same kind.
///
/// The counters live only in memory. After a reload they are re-seeded from the labels
/// that survived in the physical document, so serials of nodes deleted before the last
/// save can be handed out again in a later session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerialCounter {
    last: AHashMap<String, u32>,
}

impl SerialCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds counters from the `-NNN` label suffixes already present in a store.
    pub fn from_store(store: &GraphStore) -> Self {
        let mut counter = Self::new();
        counter.observe_store(store);
        counter
    }

    /// Allocates the next serial for a kind, starting at 1. Returns `None` once the kind
    /// has used up every serial, leaving the counter untouched.
    pub fn next(&mut self, kind_id: &str) -> Option<u32> {
        let serial = self.peek(kind_id)?;
        self.last.insert(kind_id.to_string(), serial);
        Some(serial)
    }

    /// The serial `next` would return, without allocating it.
    pub fn peek(&self, kind_id: &str) -> Option<u32> {
        self.last.get(kind_id).copied().unwrap_or(0).checked_add(1)
    }

    /// Records a serial seen elsewhere so it is never handed out again.
    pub fn observe(&mut self, kind_id: &str, serial: u32) {
        let last = self.last.entry(kind_id.to_string()).or_insert(0);
        *last = (*last).max(serial);
    }

    pub fn observe_store(&mut self, store: &GraphStore) {
        for node in store.nodes() {
            if let Some(serial) = parse_serial(node.label()) {
                self.observe(&node.kind_id, serial);
            }
        }
    }
}

/// `Warehouse` + 1 -> `Warehouse-001`.
pub fn format_label(kind_label: &str, serial: u32) -> String {
    format!("{}-{:03}", kind_label, serial)
}

/// Extracts the numeric suffix of a label produced by [`format_label`].
pub fn parse_serial(label: &str) -> Option<u32> {
    let (_, suffix) = label.rsplit_once('-')?;
    if suffix.len() < 3 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}
