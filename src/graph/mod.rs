//! Per-view node/edge stores.
//!
//! The editor holds two independent [`GraphStore`]s, one for the Flow View and one for
//! the Physical View. Edges never cross between them, and node ids are allocated from
//! separate `f`/`p` namespaces so an id alone tells you which view it belongs to.

pub mod node;
pub mod placement;
pub mod store;

pub use node::*;
pub use placement::{Placement, PlacementBounds};
pub use store::GraphStore;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two linked canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Logical process sequencing.
    Flow,
    /// Spatial site layout.
    Physical,
}

impl View {
    /// Prefix used when allocating node ids in this view.
    pub fn id_prefix(self) -> &'static str {
        match self {
            View::Flow => "f",
            View::Physical => "p",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            View::Flow => "flow",
            View::Physical => "physical",
        }
    }

    /// The view on the other side of the relation table.
    pub fn other(self) -> View {
        match self {
            View::Flow => View::Physical,
            View::Physical => View::Flow,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
