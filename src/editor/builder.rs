use super::Editor;
use crate::catalog::Catalog;
use crate::error::GraphError;
use crate::graph::{GraphNode, GraphStore, Placement, PlacementBounds, Position, View};

/// Configures and creates an [`Editor`].
///
/// ```rust
/// use genba::prelude::*;
///
/// let editor = Editor::builder()
///     .with_catalog(Catalog::logistics())
///     .with_seed(7)
///     .with_sample_layout()
///     .build()
///     .expect("the built-in catalog has flow kinds");
/// assert_eq!(editor.flow().len(), 5);
/// ```
pub struct EditorBuilder {
    catalog: Catalog,
    seed: Option<u64>,
    bounds: PlacementBounds,
    sample_layout: bool,
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::logistics(),
            seed: None,
            bounds: PlacementBounds::default(),
            sample_layout: false,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Makes the positions of assigned nodes reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_placement_bounds(mut self, bounds: PlacementBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Starts with one flow node per flow kind, chained left to right, and one physical
    /// node of the first physical kind.
    pub fn with_sample_layout(mut self) -> Self {
        self.sample_layout = true;
        self
    }

    pub fn build(self) -> Result<Editor, GraphError> {
        let placement = match self.seed {
            Some(seed) => Placement::seeded(self.bounds, seed),
            None => Placement::new(self.bounds),
        };

        let mut flow = GraphStore::new(View::Flow);
        let mut physical = GraphStore::new(View::Physical);
        if self.sample_layout {
            seed_sample_layout(&self.catalog, &mut flow, &mut physical)?;
        }

        Ok(Editor::assemble(self.catalog, flow, physical, placement))
    }
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_sample_layout(
    catalog: &Catalog,
    flow: &mut GraphStore,
    physical: &mut GraphStore,
) -> Result<(), GraphError> {
    let mut previous: Option<String> = None;
    for (index, kind) in catalog.kinds(View::Flow).iter().enumerate() {
        let id = format!("f{}", index + 1);
        let position = Position::new(100.0 + 200.0 * index as f64, 100.0);
        flow.insert_node(
            GraphNode::new(id.clone(), kind.id.clone(), kind.label.clone(), position)
                .with_icon(kind.icon.clone()),
        )?;
        if let Some(previous) = previous.take() {
            flow.connect(&previous, &id)?;
        }
        previous = Some(id);
    }

    if let Some(kind) = catalog.kinds(View::Physical).first() {
        physical.insert_node(
            GraphNode::new("p1", kind.id.clone(), kind.label.clone(), Position::new(100.0, 50.0))
                .with_icon(kind.icon.clone()),
        )?;
    }
    Ok(())
}
