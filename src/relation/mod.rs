//! Flow-to-physical associations.
//!
//! A [`RelationTable`] maps each flow node to the ordered set of physical nodes it is
//! associated with. [`RelationModel`] adds the assignment operation on top: creating a new
//! physical node with a serial label and linking it in one step.

pub mod model;
pub mod serial;
pub mod table;

pub use model::RelationModel;
pub use serial::{SerialCounter, format_label, parse_serial};
pub use table::{Relation, RelationTable};
