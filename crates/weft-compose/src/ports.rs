use weft_model::{CatalogFilter, ComponentDescriptor, ComponentId, ItemId, ItemRecord};

/// Read-only access to the set of selectable components. Results are
/// immutable snapshots at selection time.
pub trait CatalogPort {
    fn lookup(&self, id: &ComponentId) -> Option<ComponentDescriptor>;
    fn search(&self, filter: &CatalogFilter) -> Vec<ComponentDescriptor>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError(pub String);

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for StoreError {}

/// Persistence boundary. Invoked only after the edit-impact gate has
/// cleared the pending edit (or immediately for new records).
pub trait StorePort {
    fn save(&self, record: &ItemRecord) -> Result<ItemId, StoreError>;
}

/// Identity allocation. The persistence collaborator owns identity in
/// the surrounding system, so new ids come through a port rather than an
/// internal counter.
pub trait IdPort {
    fn next_item_id(&self) -> ItemId;
}
