//! In-memory port adapters, for tests and UI prototyping.

use crate::ports::{CatalogPort, IdPort, StoreError, StorePort};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use weft_model::{
    CatalogFilter, ComponentDescriptor, ComponentId, ItemId, ItemRecord, ParseError, ID_MAX_LEN,
};

pub struct MemoryCatalog {
    components: Vec<ComponentDescriptor>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new(components: Vec<ComponentDescriptor>) -> Self {
        Self { components }
    }
}

impl CatalogPort for MemoryCatalog {
    fn lookup(&self, id: &ComponentId) -> Option<ComponentDescriptor> {
        self.components.iter().find(|c| c.id == *id).cloned()
    }

    fn search(&self, filter: &CatalogFilter) -> Vec<ComponentDescriptor> {
        self.components
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect()
    }
}

/// Keeps saved records in a map keyed by item id. `fail_next_save`
/// injects a one-shot failure so callers can exercise the retry
/// contract (a failed save must leave the edit session untouched).
#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<BTreeMap<String, ItemRecord>>,
    fail_next: Cell<bool>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_save(&self) {
        self.fail_next.set(true);
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<ItemRecord> {
        self.records.borrow().get(id.as_str()).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl StorePort for MemoryStore {
    fn save(&self, record: &ItemRecord) -> Result<ItemId, StoreError> {
        if self.fail_next.take() {
            return Err(StoreError("injected store failure".to_string()));
        }
        self.records
            .borrow_mut()
            .insert(record.id.as_str().to_string(), record.clone());
        Ok(record.id.clone())
    }
}

/// Allocates `prefix-0001`, `prefix-0002`, ... The prefix is validated
/// as an identifier at construction, which keeps allocation itself
/// infallible.
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Result<Self, ParseError> {
        // The prefix must parse as an id with headroom for the longest
        // counter suffix ("-" plus a u64).
        ItemId::parse(prefix)?;
        if prefix.len() + 21 > ID_MAX_LEN {
            return Err(ParseError::TooLong("sequential id prefix", ID_MAX_LEN - 21));
        }
        Ok(Self {
            prefix: prefix.to_string(),
            next: Cell::new(1),
        })
    }
}

impl IdPort for SequentialIds {
    fn next_item_id(&self) -> ItemId {
        let n = self.next.get();
        self.next.set(n + 1);
        ItemId::parse(&format!("{}-{n:04}", self.prefix))
            .unwrap_or_else(|_| unreachable!("prefix validated at construction"))
    }
}
