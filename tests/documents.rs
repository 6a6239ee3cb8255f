//! Tests for exporting and importing the three workspace documents.
mod common;
use common::*;
use genba::document::{ImportBundle, to_pretty_json};
use genba::prelude::*;
use std::fs;
use tempfile::tempdir;

fn sources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Genba.flow", FLOW_JSON),
        ("Genba.physical", PHYSICAL_JSON),
        ("Genba.relation", RELATION_JSON),
    ]
}

#[test]
fn test_file_suffix_classification() {
    assert_eq!(DocumentKind::from_file_name("Genba.flow"), Some(DocumentKind::Flow));
    assert_eq!(
        DocumentKind::from_file_name("site-b.physical"),
        Some(DocumentKind::Physical)
    );
    assert_eq!(
        DocumentKind::from_file_name("Genba.relation"),
        Some(DocumentKind::Relation)
    );
    assert_eq!(DocumentKind::from_file_name("Genba.json"), None);
    assert_eq!(DocumentKind::from_file_name("flow"), None);
    assert_eq!(DocumentKind::Physical.file_name(DEFAULT_STEM), "Genba.physical");
}

#[test]
fn test_export_uses_react_flow_shape() {
    let editor = assigned_editor();

    let flow: serde_json::Value =
        serde_json::from_str(&editor.export_document(DocumentKind::Flow).unwrap()).unwrap();
    assert_eq!(flow["nodes"][0]["id"], "f1");
    assert_eq!(flow["nodes"][0]["type"], "truckSource");
    assert_eq!(flow["nodes"][0]["data"]["label"], "Truck Source");
    assert_eq!(flow["edges"][0]["id"], "ef1-f2");
    assert!(flow["nodes"][0].get("emphasis").is_none());

    let relation: serde_json::Value =
        serde_json::from_str(&editor.export_document(DocumentKind::Relation).unwrap()).unwrap();
    assert_eq!(
        relation,
        serde_json::json!([
            { "flowNodeId": "f1", "physicalNodeIds": ["p2", "p3"] },
            { "flowNodeId": "f2", "physicalNodeIds": ["p4"] }
        ])
    );
}

#[test]
fn test_export_is_pretty_printed() {
    let json = to_pretty_json(DocumentKind::Relation, &vec![relation("f1", &["p1"])]).unwrap();
    assert!(json.contains('\n'));
    assert!(json.contains("  \"flowNodeId\": \"f1\""));
}

#[test]
fn test_round_trip_through_files() {
    let dir = tempdir().unwrap();
    let mut editor = assigned_editor();
    editor.hover(View::Flow, "f1");

    let written = write_documents(&editor, dir.path(), DEFAULT_STEM).unwrap();
    assert_eq!(written.flow, dir.path().join("Genba.flow"));
    assert!(written.physical.is_file());
    assert!(written.relation.is_file());

    let mut restored = empty_editor();
    let summary = restored
        .import(ImportBundle::from_dir(dir.path(), DEFAULT_STEM).unwrap())
        .unwrap();

    assert_eq!(
        summary.replaced,
        [DocumentKind::Flow, DocumentKind::Physical, DocumentKind::Relation]
    );
    assert_eq!(summary.pruned_references, 0);
    assert_eq!(restored.flow_document(), editor.flow_document());
    assert_eq!(restored.physical_document(), editor.physical_document());
    assert_eq!(restored.relations(), editor.relations());
    // Emphasis is never persisted.
    assert!(restored.physical().nodes().iter().all(|n| !n.is_dimmed()));
}

#[test]
fn test_fractional_positions_survive_round_trip() {
    let mut editor = empty_editor();
    let id = editor
        .add_node(View::Physical, "gate", Position::new(123.456789012345, 0.1 + 0.2))
        .unwrap();
    let json = editor.export_document(DocumentKind::Physical).unwrap();

    let mut restored = empty_editor();
    restored
        .import(ImportBundle::from_sources([("Genba.physical", json.as_str())]).unwrap())
        .unwrap();
    assert_eq!(
        restored.physical().node(&id).unwrap().position,
        editor.physical().node(&id).unwrap().position
    );
}

#[test]
fn test_import_from_sources_replaces_workspace() {
    let mut editor = assigned_editor();
    editor.open_assignment("f1", Position::default()).unwrap();

    let summary = editor
        .dispatch(EditorEvent::Upload(ImportBundle::from_sources(sources()).unwrap()))
        .unwrap();

    assert!(matches!(summary, EventOutcome::Imported(_)));
    assert_eq!(editor.flow().len(), 2);
    assert_eq!(editor.physical().len(), 2);
    assert_eq!(editor.relations_for("f1"), ["p3"]);
    assert_eq!(editor.relations_for("f2"), ["p9"]);
    assert!(!editor.workflow().is_open());
    assert!(editor.highlight().is_idle());
}

#[test]
fn test_import_reseeds_ids_and_serials() {
    let mut editor = empty_editor();
    editor
        .import(ImportBundle::from_sources(sources()).unwrap())
        .unwrap();

    let id = editor.assign("f1", "warehouse").unwrap();
    assert_eq!(id, "p10");
    assert_eq!(editor.physical().node(&id).unwrap().label(), "Warehouse-005");

    let flow_id = editor
        .add_node(View::Flow, "truckBay", Position::default())
        .unwrap();
    assert_eq!(flow_id, "f3");
}

#[test]
fn test_partial_import_keeps_other_stores() {
    let mut editor = assigned_editor();
    let physical_before = editor.physical_document();

    let summary = editor
        .import(ImportBundle::from_sources([("Genba.flow", FLOW_JSON)]).unwrap())
        .unwrap();

    assert_eq!(summary.replaced, [DocumentKind::Flow]);
    assert_eq!(editor.physical_document(), physical_before);
    // f1 and f2 exist in the new flow document, so their relations survive.
    assert_eq!(editor.relations_for("f1"), ["p2", "p3"]);
    assert_eq!(editor.relations_for("f2"), ["p4"]);
    assert_eq!(summary.pruned_references, 0);
}

#[test]
fn test_import_prunes_dangling_relations() {
    let mut editor = empty_editor();
    let relations = r#"[
        { "flowNodeId": "f1", "physicalNodeIds": ["p3", "p404"] },
        { "flowNodeId": "f9", "physicalNodeIds": ["p9"] }
    ]"#;

    let summary = editor
        .import(
            ImportBundle::from_sources([
                ("Genba.flow", FLOW_JSON),
                ("Genba.physical", PHYSICAL_JSON),
                ("Genba.relation", relations),
            ])
            .unwrap(),
        )
        .unwrap();

    assert_eq!(summary.pruned_references, 2);
    assert_eq!(editor.relations().to_relations(), vec![relation("f1", &["p3"])]);
}

#[test]
fn test_malformed_document_rejects_whole_bundle() {
    let err = ImportBundle::from_sources([
        ("Genba.flow", FLOW_JSON),
        ("Genba.physical", "{ \"nodes\": [ oops"),
    ])
    .unwrap_err();

    match err {
        ImportError::MalformedImport {
            document,
            source_name,
            ..
        } => {
            assert_eq!(document, DocumentKind::Physical);
            assert_eq!(source_name, "Genba.physical");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unknown_kind_rejects_import_without_changes() {
    let mut editor = assigned_editor();
    let flow_before = editor.flow_document();
    let physical_before = editor.physical_document();
    let relations_before = editor.relations().clone();

    let physical = r#"{
      "nodes": [
        { "id": "p1", "type": "spaceport", "position": { "x": 0, "y": 0 },
          "data": { "label": "Spaceport" } }
      ],
      "edges": []
    }"#;
    let bundle = ImportBundle::from_sources([
        ("Genba.flow", FLOW_JSON),
        ("Genba.physical", physical),
    ])
    .unwrap();

    let err = editor.import(bundle).unwrap_err();
    assert!(matches!(
        err,
        ImportError::MalformedImport {
            document: DocumentKind::Physical,
            ..
        }
    ));
    assert!(err.to_string().contains("spaceport"));

    assert_eq!(editor.flow_document(), flow_before);
    assert_eq!(editor.physical_document(), physical_before);
    assert_eq!(editor.relations(), &relations_before);
}

#[test]
fn test_dangling_edge_rejects_import() {
    let mut editor = sample_editor();
    let flow = GraphDocument {
        nodes: vec![flow_node("f1", "truckSource", "Truck Source")],
        edges: vec![GraphEdge::between("f1", "f2")],
    };

    let err = editor.import(ImportBundle::new().with_flow(flow)).unwrap_err();

    assert_eq!(
        err,
        ImportError::MalformedImport {
            document: DocumentKind::Flow,
            source_name: "Genba.flow".to_string(),
            message: GraphError::DanglingEdge {
                view: View::Flow,
                edge_id: "ef1-f2".to_string(),
                missing_node_id: "f2".to_string(),
            }
            .to_string(),
        }
    );
    assert_eq!(editor.flow().len(), 5);
}

#[test]
fn test_duplicate_node_ids_reject_import() {
    let mut editor = empty_editor();
    let physical = GraphDocument {
        nodes: vec![
            physical_node("p1", "gate", "Gate-001"),
            physical_node("p1", "gate", "Gate-002"),
        ],
        edges: vec![],
    };
    let err = editor
        .import(ImportBundle::new().with_physical(physical))
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert!(editor.physical().is_empty());
}

#[test]
fn test_bundle_rejects_unrecognized_and_duplicate_files() {
    assert_eq!(
        ImportBundle::from_sources([("notes.txt", "{}")]).unwrap_err(),
        ImportError::UnrecognizedFile("notes.txt".to_string())
    );
    assert_eq!(
        ImportBundle::from_sources([("a.flow", FLOW_JSON), ("b.flow", FLOW_JSON)]).unwrap_err(),
        ImportError::DuplicateDocument(DocumentKind::Flow)
    );
}

#[test]
fn test_from_dir_reads_only_existing_documents() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Site.relation"), RELATION_JSON).unwrap();

    let bundle = ImportBundle::from_dir(dir.path(), "Site").unwrap();
    assert_eq!(bundle.kinds(), [DocumentKind::Relation]);
    assert_eq!(bundle.relations().unwrap().len(), 2);

    let empty = ImportBundle::from_dir(dir.path(), DEFAULT_STEM).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_from_paths_reports_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("Genba.flow");
    let err = ImportBundle::from_paths([&missing]).unwrap_err();
    assert!(matches!(err, ImportError::Io { .. }));
}

#[test]
fn test_write_documents_creates_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("exports").join("today");
    let editor = sample_editor();

    let written = write_documents(&editor, &nested, "Yard").unwrap();

    assert_eq!(written.relation, nested.join("Yard.relation"));
    assert_eq!(fs::read_to_string(&written.relation).unwrap().trim(), "[]");
}

#[test]
fn test_export_serializes_borrowed_slices() {
    let editor = assigned_editor();
    let entries: &[Relation] = editor.relations().entries();
    let json = to_pretty_json(DocumentKind::Relation, entries).unwrap();
    assert_eq!(json, editor.export_document(DocumentKind::Relation).unwrap());
}

#[test]
fn test_import_accepts_ids_with_huge_suffix() {
    let flow = r#"{
  "nodes": [
    { "id": "f18446744073709551615", "type": "truckSource", "position": { "x": 0.0, "y": 0.0 },
      "data": { "label": "Truck Source" } }
  ],
  "edges": []
}"#;
    let mut editor = empty_editor();
    editor
        .import(ImportBundle::from_sources([("Genba.flow", flow)]).unwrap())
        .unwrap();

    let id = editor.add_node(View::Flow, "parking", Position::default()).unwrap();
    assert_eq!(id, "f1");
    assert_eq!(editor.flow().len(), 2);
}

#[test]
fn test_assign_fails_cleanly_when_serials_are_exhausted() {
    let physical = r#"{
  "nodes": [
    { "id": "p1", "type": "warehouse", "position": { "x": 0.0, "y": 0.0 },
      "data": { "label": "Warehouse-4294967295" } }
  ],
  "edges": []
}"#;
    let mut editor = empty_editor();
    editor
        .import(
            ImportBundle::from_sources([("Genba.flow", FLOW_JSON), ("Genba.physical", physical)])
                .unwrap(),
        )
        .unwrap();
    let physical_before = editor.physical_document();
    let relations_before = editor.relations().clone();

    assert_eq!(
        editor.assign("f1", "warehouse"),
        Err(AssignmentError::SerialExhausted {
            kind_id: "warehouse".to_string(),
        })
    );
    assert_eq!(editor.physical_document(), physical_before);
    assert_eq!(editor.relations(), &relations_before);

    // Other kinds keep their own numbering.
    let gate = editor.assign("f1", "gate").unwrap();
    assert_eq!(editor.physical().node(&gate).unwrap().label(), "Gate-001");
}

#[test]
fn test_serials_resume_from_surviving_labels_after_reload() {
    let dir = tempdir().unwrap();
    let mut editor = sample_editor();
    let first = editor.assign("f1", "warehouse").unwrap();
    let second = editor.assign("f1", "warehouse").unwrap();
    editor.delete_node(View::Physical, &second);

    // Within the session the deleted serial stays retired.
    let third = editor.assign("f1", "warehouse").unwrap();
    assert_eq!(editor.physical().node(&third).unwrap().label(), "Warehouse-003");
    editor.delete_node(View::Physical, &third);
    write_documents(&editor, dir.path(), DEFAULT_STEM).unwrap();

    // A fresh session only sees the labels that were saved.
    let mut restored = empty_editor();
    restored
        .import(ImportBundle::from_dir(dir.path(), DEFAULT_STEM).unwrap())
        .unwrap();
    assert_eq!(restored.physical().node(&first).unwrap().label(), "Warehouse-001");
    let next = restored.assign("f1", "warehouse").unwrap();
    assert_eq!(restored.physical().node(&next).unwrap().label(), "Warehouse-002");
}
