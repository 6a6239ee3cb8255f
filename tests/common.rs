//! Common test utilities for building editors and workspace documents.
use genba::prelude::*;

/// Seed used by every editor built here, so assigned positions are reproducible.
#[allow(dead_code)]
pub const TEST_SEED: u64 = 42;

/// The sample layout over the logistics catalog:
///
/// - Flow: `f1` truckSource -> `f2` parking -> `f3` truckBay -> `f4` tmpStorage -> `f5` destinations
/// - Physical: `p1` warehouse
#[allow(dead_code)]
pub fn sample_editor() -> Editor {
    Editor::builder()
        .with_catalog(Catalog::logistics())
        .with_seed(TEST_SEED)
        .with_sample_layout()
        .build()
        .expect("sample layout should build")
}

/// An editor with no nodes at all.
#[allow(dead_code)]
pub fn empty_editor() -> Editor {
    Editor::builder()
        .with_seed(TEST_SEED)
        .build()
        .expect("empty editor should build")
}

/// Sample editor where `f1` owns two warehouses (`p2`, `p3`) and `f2` owns one car stop (`p4`).
#[allow(dead_code)]
pub fn assigned_editor() -> Editor {
    let mut editor = sample_editor();
    editor.assign("f1", "warehouse").expect("truck source accepts warehouses");
    editor.assign("f1", "warehouse").expect("truck source accepts warehouses");
    editor.assign("f2", "carStop").expect("parking accepts car stops");
    editor.clear_highlight();
    editor
}

#[allow(dead_code)]
pub fn flow_node(id: &str, kind_id: &str, label: &str) -> GraphNode {
    GraphNode::new(id, kind_id, label, Position::new(100.0, 100.0))
}

#[allow(dead_code)]
pub fn physical_node(id: &str, kind_id: &str, label: &str) -> GraphNode {
    GraphNode::new(id, kind_id, label, Position::new(250.5, 175.25))
}

#[allow(dead_code)]
pub fn relation(flow_node_id: &str, physical_node_ids: &[&str]) -> Relation {
    Relation {
        flow_node_id: flow_node_id.to_string(),
        physical_node_ids: physical_node_ids.iter().map(|id| id.to_string()).collect(),
    }
}

/// Highlight/dim flags of every node of a store, in store order.
#[allow(dead_code)]
pub fn emphasis_of(store: &GraphStore) -> Vec<(String, bool, bool)> {
    store
        .nodes()
        .iter()
        .map(|n| (n.id.clone(), n.is_highlighted(), n.is_dimmed()))
        .collect()
}

/// A flow document with two chained nodes.
#[allow(dead_code)]
pub const FLOW_JSON: &str = r#"{
  "nodes": [
    { "id": "f1", "type": "truckSource", "position": { "x": 100.0, "y": 100.0 },
      "data": { "label": "Truck Source", "icon": "icons/TruckSource.svg" } },
    { "id": "f2", "type": "parking", "position": { "x": 300.0, "y": 100.0 },
      "data": { "label": "Parking" } }
  ],
  "edges": [
    { "id": "ef1-f2", "source": "f1", "target": "f2" }
  ]
}"#;

/// A physical document with labelled, previously assigned nodes.
#[allow(dead_code)]
pub const PHYSICAL_JSON: &str = r#"{
  "nodes": [
    { "id": "p3", "type": "warehouse", "position": { "x": 120.0, "y": 140.0 },
      "data": { "label": "Warehouse-004" } },
    { "id": "p9", "type": "carStop", "position": { "x": 480.0, "y": 220.0 },
      "data": { "label": "Car Stop-001" } }
  ],
  "edges": []
}"#;

#[allow(dead_code)]
pub const RELATION_JSON: &str = r#"[
  { "flowNodeId": "f1", "physicalNodeIds": ["p3"] },
  { "flowNodeId": "f2", "physicalNodeIds": ["p9"] }
]"#;
