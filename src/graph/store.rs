use super::{Emphasis, GraphEdge, GraphNode, NodeData, Position, View};
use crate::document::GraphDocument;
use crate::error::GraphError;
use ahash::AHashSet;
use tracing::debug;

/// Mutable node and edge collections of one view.
///
/// Nodes and edges keep insertion order, which is also the order they are exported in.
#[derive(Debug, Clone)]
pub struct GraphStore {
    view: View,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    next_serial: u64,
}

impl GraphStore {
    pub fn new(view: View) -> Self {
        Self {
            view,
            nodes: Vec::new(),
            edges: Vec::new(),
            next_serial: 1,
        }
    }

    /// Builds a store from an exported document, checking that node and edge ids are unique
    /// and that every edge connects two nodes of this document.
    pub fn from_document(view: View, document: GraphDocument) -> Result<Self, GraphError> {
        let mut node_ids = AHashSet::with_capacity(document.nodes.len());
        for node in &document.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNode {
                    view,
                    node_id: node.id.clone(),
                });
            }
        }

        let mut edge_ids = AHashSet::with_capacity(document.edges.len());
        for edge in &document.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(GraphError::DuplicateEdge {
                    view,
                    edge_id: edge.id.clone(),
                });
            }
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(GraphError::DanglingEdge {
                        view,
                        edge_id: edge.id.clone(),
                        missing_node_id: endpoint.clone(),
                    });
                }
            }
        }

        // Suffixes at the top of the range cannot seed the counter; allocation skips
        // those ids instead.
        let next_serial = document
            .nodes
            .iter()
            .filter_map(|n| Self::serial_of(view, &n.id)?.checked_add(1))
            .max()
            .unwrap_or(1);

        let mut nodes = document.nodes;
        for node in &mut nodes {
            node.emphasis = Emphasis::NONE;
        }

        Ok(Self {
            view,
            nodes,
            edges: document.edges,
            next_serial,
        })
    }

    /// Snapshot of the store as a document. Emphasis flags are reset in the copy.
    pub fn to_document(&self) -> GraphDocument {
        let mut nodes = self.nodes.clone();
        for node in &mut nodes {
            node.emphasis = Emphasis::NONE;
        }
        GraphDocument {
            nodes,
            edges: self.edges.clone(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, node_id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    pub fn edge(&self, edge_id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == edge_id)
    }

    pub fn nodes_of_kind<'a>(&'a self, kind_id: &'a str) -> impl Iterator<Item = &'a GraphNode> {
        self.nodes.iter().filter(move |n| n.kind_id == kind_id)
    }

    /// Creates a node with a freshly allocated id and returns that id.
    pub fn add_node(&mut self, kind_id: &str, data: NodeData, position: Position) -> String {
        let id = self.allocate_id();
        debug!(view = %self.view, node_id = %id, kind = kind_id, "adding node");
        self.nodes.push(GraphNode {
            id: id.clone(),
            kind_id: kind_id.to_string(),
            position,
            data,
            emphasis: Emphasis::NONE,
        });
        id
    }

    /// Inserts a node that already carries an id.
    pub fn insert_node(&mut self, mut node: GraphNode) -> Result<(), GraphError> {
        if self.contains(&node.id) {
            return Err(GraphError::DuplicateNode {
                view: self.view,
                node_id: node.id,
            });
        }
        if let Some(next) = Self::serial_of(self.view, &node.id).and_then(|s| s.checked_add(1)) {
            self.next_serial = self.next_serial.max(next);
        }
        node.emphasis = Emphasis::NONE;
        self.nodes.push(node);
        Ok(())
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, node_id: &str) -> Option<GraphNode> {
        let index = self.nodes.iter().position(|n| n.id == node_id)?;
        let node = self.nodes.remove(index);
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(node_id));
        debug!(
            view = %self.view,
            node_id,
            removed_edges = before - self.edges.len(),
            "removed node"
        );
        Some(node)
    }

    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), GraphError> {
        let node = self.node_mut(node_id)?;
        node.position = position;
        Ok(())
    }

    /// Connects two nodes of this view. Connecting an already connected pair returns the
    /// existing edge id instead of adding a duplicate.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<String, GraphError> {
        for endpoint in [source, target] {
            if !self.contains(endpoint) {
                return Err(GraphError::NodeNotFound {
                    view: self.view,
                    node_id: endpoint.to_string(),
                });
            }
        }

        if let Some(existing) = self
            .edges
            .iter()
            .find(|e| e.source == source && e.target == target)
        {
            return Ok(existing.id.clone());
        }

        let edge = GraphEdge::between(source, target);
        if self.edge(&edge.id).is_some() {
            return Err(GraphError::DuplicateEdge {
                view: self.view,
                edge_id: edge.id,
            });
        }
        debug!(view = %self.view, edge_id = %edge.id, "connecting nodes");
        let id = edge.id.clone();
        self.edges.push(edge);
        Ok(id)
    }

    pub fn remove_edge(&mut self, edge_id: &str) -> Option<GraphEdge> {
        let index = self.edges.iter().position(|e| e.id == edge_id)?;
        Some(self.edges.remove(index))
    }

    /// Recomputes the emphasis flags of every node.
    pub(crate) fn apply_emphasis(&mut self, emphasis_for: impl Fn(&GraphNode) -> Emphasis) {
        for node in &mut self.nodes {
            let emphasis = emphasis_for(&*node);
            node.emphasis = emphasis;
        }
    }

    fn node_mut(&mut self, node_id: &str) -> Result<&mut GraphNode, GraphError> {
        let view = self.view;
        self.nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| GraphError::NodeNotFound {
                view,
                node_id: node_id.to_string(),
            })
    }

    /// Once the counter is exhausted it restarts at 1, still skipping live ids.
    fn allocate_id(&mut self) -> String {
        loop {
            let candidate = format!("{}{}", self.view.id_prefix(), self.next_serial);
            self.next_serial = self.next_serial.checked_add(1).unwrap_or(1);
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Numeric suffix of an id in this view's namespace, e.g. `p12` -> 12.
    fn serial_of(view: View, node_id: &str) -> Option<u64> {
        node_id.strip_prefix(view.id_prefix())?.parse().ok()
    }
}
