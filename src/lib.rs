//! # Genba - Linked Flow and Physical Layout Editor
//!
//! **Genba** is the state engine behind a two-canvas logistics editor. One canvas, the
//! *Flow View*, models the sequence of process stages a truck passes through (arrival,
//! parking, bay, temporary storage, destinations). The other, the *Physical View*, models
//! the concrete facilities that realize those stages (warehouses, gates, car stops,
//! pallets, storage areas). A relation table ties the two together.
//!
//! ## Core Workflow
//!
//! 1.  **Pick a Catalog**: The [`catalog::Catalog`] defines which node kinds exist in each
//!     view and which physical kinds each flow kind may be realized by. Use the built-in
//!     logistics catalog or load one from JSON.
//! 2.  **Build an Editor**: `Editor::builder()` creates the editor, optionally with a seeded
//!     placement generator and the sample layout.
//! 3.  **Drive It**: Call operations directly (`assign`, `unassign`, `hover`, ...) or feed
//!     presentation events through [`editor::Editor::dispatch`]. Highlight flags are kept in
//!     sync on every mutation.
//! 4.  **Persist**: Export the three workspace documents and import them back, all or
//!     nothing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genba::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let mut editor = Editor::builder().with_sample_layout().build()?;
//!
//!     // f1 is the truck source of the sample layout; it accepts warehouses.
//!     let warehouse = editor.assign("f1", "warehouse")?;
//!     println!("created {warehouse}");
//!
//!     // Hovering the flow node highlights it and its physical nodes, dimming the rest.
//!     editor.hover(View::Flow, "f1");
//!     for node in editor.physical().nodes() {
//!         println!("{} highlighted={} dimmed={}", node.label(), node.is_highlighted(), node.is_dimmed());
//!     }
//!
//!     let written = write_documents(&editor, Path::new("workspace"), DEFAULT_STEM)?;
//!     println!("saved relations to {}", written.relation.display());
//!
//!     let mut restored = Editor::new(Catalog::logistics());
//!     restored.import(ImportBundle::from_dir(Path::new("workspace"), DEFAULT_STEM)?)?;
//!     assert_eq!(restored.relations_for("f1"), editor.relations_for("f1"));
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod document;
pub mod editor;
pub mod error;
pub mod graph;
pub mod highlight;
pub mod prelude;
pub mod relation;
pub mod workflow;
