use serde::{Deserialize, Serialize};

/// An immutable catalog entry describing a class of node.
///
/// Flow kinds carry the list of physical kinds that may be assigned to nodes of that
/// kind; physical kinds leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeKind {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, alias = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub has_input: bool,
    #[serde(default)]
    pub has_output: bool,
    #[serde(default, alias = "allowedPhysicalTypes", skip_serializing_if = "Vec::is_empty")]
    pub allowed_physical_kinds: Vec<String>,
}

impl NodeKind {
    pub fn new(id: &str, label: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: String::new(),
            category: category.to_string(),
            icon: None,
            color: None,
            has_input: false,
            has_output: false,
            allowed_physical_kinds: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn with_ports(mut self, has_input: bool, has_output: bool) -> Self {
        self.has_input = has_input;
        self.has_output = has_output;
        self
    }

    pub fn allowing(mut self, physical_kind_ids: &[&str]) -> Self {
        self.allowed_physical_kinds = physical_kind_ids.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Whether nodes of this (flow) kind may be associated with the given physical kind.
    pub fn allows(&self, physical_kind_id: &str) -> bool {
        self.allowed_physical_kinds
            .iter()
            .any(|allowed| allowed == physical_kind_id)
    }
}
