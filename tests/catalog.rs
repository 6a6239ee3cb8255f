//! Tests for node-kind catalogs.
use genba::catalog::CatalogDocument;
use genba::prelude::*;
use std::fs;
use tempfile::tempdir;

const CATALOG_JSON: &str = r##"{
  "flowKinds": [
    { "id": "inbound", "label": "Inbound", "category": "Source",
      "hasInput": false, "hasOutput": true, "allowedPhysicalKinds": ["dock"] },
    { "id": "outbound", "label": "Outbound", "category": "Destination",
      "description": "Leaves the site", "backgroundColor": "#E91E63",
      "hasInput": true, "hasOutput": false, "allowedPhysicalTypes": ["dock", "yard"] }
  ],
  "physicalKinds": [
    { "id": "dock", "label": "Dock", "category": "Facility", "icon": "icons/Dock.svg",
      "hasInput": true, "hasOutput": true },
    { "id": "yard", "label": "Yard", "category": "Area",
      "hasInput": true, "hasOutput": true }
  ]
}"##;

#[test]
fn test_logistics_catalog_allow_lists() {
    let catalog = Catalog::logistics();

    let ids = |flow_kind: &str| -> Vec<String> {
        catalog
            .allowed_physical_kinds(flow_kind)
            .into_iter()
            .map(|k| k.id.clone())
            .collect()
    };
    assert_eq!(ids("truckSource"), ["warehouse", "gate"]);
    assert_eq!(ids("parking"), ["carStop"]);
    assert_eq!(ids("truckBay"), ["carStop"]);
    assert_eq!(ids("tmpStorage"), ["pallet"]);
    assert_eq!(ids("destinations"), ["warehouse", "gate"]);
    assert!(ids("unknown").is_empty());

    assert!(catalog.allows("tmpStorage", "pallet"));
    assert!(!catalog.allows("tmpStorage", "warehouse"));
    assert!(!catalog.allows("warehouse", "warehouse"));
}

#[test]
fn test_catalog_lookups_are_view_scoped() {
    let catalog = Catalog::logistics();
    assert!(catalog.kind(View::Flow, "parking").is_some());
    assert!(catalog.kind(View::Physical, "parking").is_none());
    assert_eq!(catalog.physical_kind("carStop").unwrap().label, "Car Stop");
    assert_eq!(catalog.kinds(View::Physical).len(), 5);
}

#[test]
fn test_categories_keep_first_seen_order() {
    let catalog = Catalog::logistics();
    assert_eq!(
        catalog.categories(View::Flow),
        ["Source", "Area", "Storage", "Destination"]
    );
    let areas: Vec<_> = catalog
        .kinds_in_category(View::Flow, "Area")
        .map(|k| k.id.as_str())
        .collect();
    assert_eq!(areas, ["parking", "truckBay"]);
}

#[test]
fn test_catalog_from_json() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();

    let outbound = catalog.flow_kind("outbound").unwrap();
    assert_eq!(outbound.color.as_deref(), Some("#E91E63"));
    assert_eq!(outbound.description, "Leaves the site");
    assert!(outbound.allows("yard"));
    assert_eq!(catalog.flow_kind("inbound").unwrap().description, "");
    assert_eq!(
        catalog.physical_kind("dock").unwrap().icon.as_deref(),
        Some("icons/Dock.svg")
    );
}

#[test]
fn test_catalog_json_round_trip() {
    let catalog = Catalog::logistics();
    let json = catalog.to_json().unwrap();
    assert!(json.contains("\"allowedPhysicalKinds\""));
    assert_eq!(Catalog::from_json(&json).unwrap(), catalog);

    let document: CatalogDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(document.flow_kinds.len(), 5);
}

#[test]
fn test_catalog_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG_JSON).unwrap();

    let catalog = Catalog::from_file(&path).unwrap();
    assert_eq!(catalog.kinds(View::Flow).len(), 2);

    let err = Catalog::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn test_catalog_rejects_invalid_json() {
    let err = Catalog::from_json("{ \"flowKinds\": 3 }").unwrap_err();
    assert!(matches!(err, CatalogError::JsonParseError(_)));
}

#[test]
fn test_catalog_validation_errors() {
    let dock = || NodeKind::new("dock", "Dock", "Facility");

    assert_eq!(
        Catalog::new(vec![], vec![dock(), dock()]).unwrap_err(),
        CatalogError::DuplicateKind {
            view: View::Physical,
            kind_id: "dock".to_string(),
        }
    );
    assert_eq!(
        Catalog::new(vec![NodeKind::new("dock", "Dock", "Area")], vec![dock()]).unwrap_err(),
        CatalogError::AmbiguousKind("dock".to_string())
    );
    assert_eq!(
        Catalog::new(vec![], vec![dock().allowing(&["dock"])]).unwrap_err(),
        CatalogError::AllowListOnPhysicalKind("dock".to_string())
    );
    assert_eq!(
        Catalog::new(
            vec![NodeKind::new("inbound", "Inbound", "Source").allowing(&["dock", "crane"])],
            vec![dock()],
        )
        .unwrap_err(),
        CatalogError::UnknownAllowedKind {
            flow_kind_id: "inbound".to_string(),
            physical_kind_id: "crane".to_string(),
        }
    );
}

#[test]
fn test_editor_with_custom_catalog() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let mut editor = Editor::builder()
        .with_catalog(catalog)
        .with_seed(3)
        .with_sample_layout()
        .build()
        .unwrap();

    assert_eq!(editor.flow().len(), 2);
    assert_eq!(editor.flow().edges().len(), 1);
    assert_eq!(editor.physical().node("p1").unwrap().kind_id, "dock");

    let yard = editor.assign("f2", "yard").unwrap();
    assert_eq!(editor.physical().node(&yard).unwrap().label(), "Yard-001");
    assert!(editor.assign("f1", "yard").is_err());
}
