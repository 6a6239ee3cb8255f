use crate::document::DocumentKind;
use crate::graph::View;
use thiserror::Error;

/// Errors that can occur while building or loading a node-kind catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Kind id '{kind_id}' is registered more than once in the {view} catalog")]
    DuplicateKind { view: View, kind_id: String },

    #[error("Kind id '{0}' is registered in both the flow and the physical catalog")]
    AmbiguousKind(String),

    #[error("Physical kind '{0}' must not declare allowed physical kinds")]
    AllowListOnPhysicalKind(String),

    #[error("Flow kind '{flow_kind_id}' allows unknown physical kind '{physical_kind_id}'")]
    UnknownAllowedKind {
        flow_kind_id: String,
        physical_kind_id: String,
    },
}

/// Errors raised by structural edits of a single view's graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node '{node_id}' already exists in the {view} view")]
    DuplicateNode { view: View, node_id: String },

    #[error("Node '{node_id}' not found in the {view} view")]
    NodeNotFound { view: View, node_id: String },

    #[error("Edge '{edge_id}' already exists in the {view} view")]
    DuplicateEdge { view: View, edge_id: String },

    #[error("Edge '{edge_id}' references node '{missing_node_id}', which is not part of the {view} view")]
    DanglingEdge {
        view: View,
        edge_id: String,
        missing_node_id: String,
    },

    #[error("Node '{node_id}' uses unknown {view} kind '{kind_id}'")]
    UnknownNodeKind {
        view: View,
        node_id: String,
        kind_id: String,
    },

    #[error("Unknown {view} kind '{kind_id}'")]
    UnknownKind { view: View, kind_id: String },

    #[error("No {view} kind is selected")]
    NoKindSelected { view: View },
}

/// Errors raised when binding physical nodes to a flow node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("Flow node '{0}' not found")]
    FlowNodeNotFound(String),

    #[error("Flow node '{flow_node_id}' has unknown kind '{kind_id}'")]
    UnknownFlowKind {
        flow_node_id: String,
        kind_id: String,
    },

    #[error(
        "Physical kind '{physical_kind_id}' cannot be assigned to flow node '{flow_node_id}' of kind '{flow_kind_id}'"
    )]
    InvalidAssignment {
        flow_node_id: String,
        flow_kind_id: String,
        physical_kind_id: String,
    },

    #[error("No serial numbers left for physical kind '{kind_id}'")]
    SerialExhausted { kind_id: String },

    #[error("No assignment workflow is open")]
    WorkflowClosed,
}

/// Errors that can occur while importing workspace documents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Malformed {document} document '{source_name}': {message}")]
    MalformedImport {
        document: DocumentKind,
        source_name: String,
        message: String,
    },

    #[error("Unrecognized file '{0}', expected a .flow, .physical or .relation suffix")]
    UnrecognizedFile(String),

    #[error("More than one {0} document was supplied")]
    DuplicateDocument(DocumentKind),

    #[error("Could not read '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors that can occur while exporting workspace documents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Failed to serialize {document} document: {message}")]
    Serialization {
        document: DocumentKind,
        message: String,
    },

    #[error("Could not write '{path}': {message}")]
    Io { path: String, message: String },
}

/// Any error an editor event can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    #[error(transparent)]
    Import(#[from] ImportError),
}
