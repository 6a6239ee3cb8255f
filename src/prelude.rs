//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the genba crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use genba::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::from_file("path/to/catalog.json")?;
//! let mut editor = Editor::builder().with_catalog(catalog).build()?;
//!
//! let truck_source = editor.add_node(View::Flow, "truckSource", Position::new(100.0, 100.0))?;
//! editor.dispatch(EditorEvent::DoubleClick {
//!     view: View::Flow,
//!     node_id: truck_source.clone(),
//!     anchor: Position::new(120.0, 140.0),
//! })?;
//! editor.dispatch(EditorEvent::Assign {
//!     physical_kind_id: "warehouse".to_string(),
//! })?;
//!
//! println!("{:?}", editor.relations_for(&truck_source));
//! # Ok(())
//! # }
//! ```

// Editor and its events
pub use crate::editor::{ClickTarget, Editor, EditorBuilder, EditorEvent, EventOutcome, NodeDetails};

// Catalog
pub use crate::catalog::{Catalog, NodeKind};

// Graphs
pub use crate::graph::{GraphEdge, GraphNode, GraphStore, Position, View};

// Relations, highlight and the assignment dialog
pub use crate::highlight::{Focus, HighlightState};
pub use crate::relation::{Relation, RelationTable};
pub use crate::workflow::{AssignmentPanel, AssignmentWorkflow};

// Documents
pub use crate::document::{
    DEFAULT_STEM, DocumentKind, GraphDocument, ImportBundle, ImportSummary, write_documents,
};

// Error types
pub use crate::error::{
    AssignmentError, CatalogError, EditorError, ExportError, GraphError, ImportError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
