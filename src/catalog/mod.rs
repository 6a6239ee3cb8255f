//! The node-kind catalogs of both views.
//!
//! A [`Catalog`] is plain configuration: it is built once, validated, and handed to the
//! editor. Nothing in the crate reads kinds from global state, so several editors with
//! different catalogs can live side by side.

mod defaults;
mod kind;
mod loader;

pub use defaults::{logistics_flow_kinds, logistics_physical_kinds};
pub use kind::NodeKind;
pub use loader::CatalogDocument;

use crate::error::CatalogError;
use crate::graph::View;
use ahash::AHashSet;
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    flow_kinds: Vec<NodeKind>,
    physical_kinds: Vec<NodeKind>,
}

impl Catalog {
    /// Validates and assembles a catalog.
    ///
    /// Kind ids must be unique within a view and must not be shared between views, since
    /// a node's `type` alone has to identify its kind. Physical kinds may not carry an
    /// allow-list, and every allow-list entry must name a registered physical kind.
    pub fn new(
        flow_kinds: Vec<NodeKind>,
        physical_kinds: Vec<NodeKind>,
    ) -> Result<Self, CatalogError> {
        for (view, kinds) in [(View::Flow, &flow_kinds), (View::Physical, &physical_kinds)] {
            if let Some(duplicate) = kinds.iter().map(|k| k.id.as_str()).duplicates().next() {
                return Err(CatalogError::DuplicateKind {
                    view,
                    kind_id: duplicate.to_string(),
                });
            }
        }

        let physical_ids: AHashSet<&str> = physical_kinds.iter().map(|k| k.id.as_str()).collect();

        if let Some(shared) = flow_kinds
            .iter()
            .find(|k| physical_ids.contains(k.id.as_str()))
        {
            return Err(CatalogError::AmbiguousKind(shared.id.clone()));
        }

        if let Some(kind) = physical_kinds
            .iter()
            .find(|k| !k.allowed_physical_kinds.is_empty())
        {
            return Err(CatalogError::AllowListOnPhysicalKind(kind.id.clone()));
        }

        for kind in &flow_kinds {
            if let Some(unknown) = kind
                .allowed_physical_kinds
                .iter()
                .find(|id| !physical_ids.contains(id.as_str()))
            {
                return Err(CatalogError::UnknownAllowedKind {
                    flow_kind_id: kind.id.clone(),
                    physical_kind_id: unknown.clone(),
                });
            }
        }

        Ok(Self {
            flow_kinds,
            physical_kinds,
        })
    }

    /// The built-in logistics catalog.
    pub fn logistics() -> Self {
        Self {
            flow_kinds: logistics_flow_kinds(),
            physical_kinds: logistics_physical_kinds(),
        }
    }

    pub fn kinds(&self, view: View) -> &[NodeKind] {
        match view {
            View::Flow => &self.flow_kinds,
            View::Physical => &self.physical_kinds,
        }
    }

    pub fn kind(&self, view: View, kind_id: &str) -> Option<&NodeKind> {
        self.kinds(view).iter().find(|k| k.id == kind_id)
    }

    pub fn flow_kind(&self, kind_id: &str) -> Option<&NodeKind> {
        self.kind(View::Flow, kind_id)
    }

    pub fn physical_kind(&self, kind_id: &str) -> Option<&NodeKind> {
        self.kind(View::Physical, kind_id)
    }

    /// Sidebar grouping keys of a view, in first-seen order.
    pub fn categories(&self, view: View) -> Vec<&str> {
        self.kinds(view)
            .iter()
            .map(|k| k.category.as_str())
            .unique()
            .collect()
    }

    pub fn kinds_in_category<'a>(
        &'a self,
        view: View,
        category: &'a str,
    ) -> impl Iterator<Item = &'a NodeKind> {
        self.kinds(view)
            .iter()
            .filter(move |k| k.category == category)
    }

    /// Physical kinds that may be assigned to nodes of the given flow kind, in catalog
    /// order. Unknown flow kinds allow nothing.
    pub fn allowed_physical_kinds(&self, flow_kind_id: &str) -> Vec<&NodeKind> {
        let Some(flow_kind) = self.flow_kind(flow_kind_id) else {
            return Vec::new();
        };
        self.physical_kinds
            .iter()
            .filter(|k| flow_kind.allows(&k.id))
            .collect()
    }

    pub fn allows(&self, flow_kind_id: &str, physical_kind_id: &str) -> bool {
        self.flow_kind(flow_kind_id)
            .is_some_and(|k| k.allows(physical_kind_id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::logistics()
    }
}
