use crate::ids::ComponentId;
use serde::{Deserialize, Serialize};

/// A selectable raw-material component as served by the catalog.
///
/// Read-only from this crate's perspective: descriptors are immutable
/// snapshots owned by the catalog collaborator. Composition entries copy
/// the display fields at selection time and never re-synchronize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ComponentDescriptor {
    pub id: ComponentId,
    pub category: String,
    pub display_name: String,
    pub color_label: String,
}

impl ComponentDescriptor {
    #[must_use]
    pub fn new(id: ComponentId, category: String, display_name: String, color_label: String) -> Self {
        Self {
            id,
            category,
            display_name,
            color_label,
        }
    }
}

/// Filter for the catalog's component listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub search_term: Option<String>,
}

impl CatalogFilter {
    #[must_use]
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            search_term: None,
        }
    }

    #[must_use]
    pub fn by_search_term(term: impl Into<String>) -> Self {
        Self {
            category: None,
            search_term: Some(term.into()),
        }
    }

    /// Shared match semantics for every catalog adapter: exact category,
    /// case-insensitive substring on the display name. A blank search
    /// term matches everything.
    #[must_use]
    pub fn matches(&self, descriptor: &ComponentDescriptor) -> bool {
        if let Some(category) = &self.category {
            if descriptor.category != *category {
                return false;
            }
        }
        if let Some(term) = &self.search_term {
            let needle = term.trim().to_lowercase();
            if !needle.is_empty() && !descriptor.display_name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}
