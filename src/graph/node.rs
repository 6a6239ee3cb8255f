use serde::{Deserialize, Serialize};

/// A point on a canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Display payload of a node, stored under `data` in the exported documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Transient visual state derived by the highlight controller. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emphasis {
    pub highlighted: bool,
    pub dimmed: bool,
}

impl Emphasis {
    pub const NONE: Emphasis = Emphasis {
        highlighted: false,
        dimmed: false,
    };
}

/// A node on one of the two canvases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind_id: String,
    pub position: Position,
    pub data: NodeData,
    #[serde(skip)]
    pub emphasis: Emphasis,
}

impl GraphNode {
    pub fn new(
        id: impl Into<String>,
        kind_id: impl Into<String>,
        label: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            kind_id: kind_id.into(),
            position,
            data: NodeData {
                label: label.into(),
                icon: None,
            },
            emphasis: Emphasis::NONE,
        }
    }

    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.data.icon = icon;
        self
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }

    pub fn icon(&self) -> Option<&str> {
        self.data.icon.as_deref()
    }

    pub fn is_highlighted(&self) -> bool {
        self.emphasis.highlighted
    }

    pub fn is_dimmed(&self) -> bool {
        self.emphasis.dimmed
    }
}

/// A directed connection between two nodes of the same view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

impl GraphEdge {
    /// Creates a handle-less edge using the `e<source>-<target>` id convention.
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: Self::id_for(&source, &target),
            source,
            target,
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn id_for(source: &str, target: &str) -> String {
        format!("e{}-{}", source, target)
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
