// SPDX-License-Identifier: Apache-2.0

use crate::component::ComponentDescriptor;
use crate::ids::ComponentId;
use crate::percent::{Percent, RATIO_FULL};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompositionError {
    DuplicateComponent(ComponentId),
    NotFound(ComponentId),
}

impl Display for CompositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateComponent(id) => {
                write!(f, "component `{id}` is already part of the composition")
            }
            Self::NotFound(id) => write!(f, "component `{id}` is not part of the composition"),
        }
    }
}

impl std::error::Error for CompositionError {}

/// One component's share of a composition.
///
/// `category`, `component_name` and `color_label` are copied from the
/// catalog descriptor at selection time so the entry stays
/// self-describing without a re-lookup (snapshot semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct CompositionEntry {
    pub component_id: ComponentId,
    pub ratio: Percent,
    pub loss: Percent,
    pub category: String,
    pub component_name: String,
    pub color_label: String,
}

impl CompositionEntry {
    #[must_use]
    pub fn from_descriptor(descriptor: &ComponentDescriptor) -> Self {
        Self {
            component_id: descriptor.id.clone(),
            ratio: Percent::ZERO,
            loss: Percent::ZERO,
            category: descriptor.category.clone(),
            component_name: descriptor.display_name.clone(),
            color_label: descriptor.color_label.clone(),
        }
    }
}

/// The mutable collection of `(component, ratio, loss)` entries attached
/// to one item record. At most one entry per component; entries keep
/// insertion order for display, which carries no semantic weight.
///
/// An empty set is valid: it means "no composition assigned yet".
///
/// Serializes as a plain entry array; deserialization routes through
/// `from_entries` so persisted payloads cannot smuggle in a duplicate
/// component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CompositionEntry>", into = "Vec<CompositionEntry>")]
pub struct CompositionSet {
    entries: Vec<CompositionEntry>,
}

impl TryFrom<Vec<CompositionEntry>> for CompositionSet {
    type Error = CompositionError;

    fn try_from(entries: Vec<CompositionEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<CompositionSet> for Vec<CompositionEntry> {
    fn from(set: CompositionSet) -> Self {
        set.entries
    }
}

impl CompositionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a set from persisted entries, re-checking the
    /// one-entry-per-component invariant.
    pub fn from_entries(entries: Vec<CompositionEntry>) -> Result<Self, CompositionError> {
        let mut set = Self::new();
        for entry in entries {
            if set.get(&entry.component_id).is_some() {
                return Err(CompositionError::DuplicateComponent(entry.component_id));
            }
            set.entries.push(entry);
        }
        Ok(set)
    }

    /// Inserts a fresh entry (ratio 0, loss 0) for the component,
    /// copying its display fields from the descriptor.
    pub fn add(&mut self, descriptor: &ComponentDescriptor) -> Result<(), CompositionError> {
        if self.get(&descriptor.id).is_some() {
            return Err(CompositionError::DuplicateComponent(descriptor.id.clone()));
        }
        self.entries.push(CompositionEntry::from_descriptor(descriptor));
        Ok(())
    }

    pub fn remove(&mut self, component_id: &ComponentId) -> Result<CompositionEntry, CompositionError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.component_id == *component_id)
            .ok_or_else(|| CompositionError::NotFound(component_id.clone()))?;
        Ok(self.entries.remove(index))
    }

    /// Stores the ratio even when it pushes the total over 100: over-limit
    /// is a reportable condition, never a blocking one.
    pub fn set_ratio(
        &mut self,
        component_id: &ComponentId,
        ratio: Percent,
    ) -> Result<(), CompositionError> {
        let entry = self.get_mut(component_id)?;
        entry.ratio = ratio;
        Ok(())
    }

    /// Same non-blocking policy as `set_ratio`; per-entry losses above 100
    /// are surfaced through `has_loss_overflow`.
    pub fn set_loss(
        &mut self,
        component_id: &ComponentId,
        loss: Percent,
    ) -> Result<(), CompositionError> {
        let entry = self.get_mut(component_id)?;
        entry.loss = loss;
        Ok(())
    }

    #[must_use]
    pub fn total_ratio(&self) -> f64 {
        self.entries.iter().map(|e| e.ratio.value()).sum()
    }

    #[must_use]
    pub fn has_ratio_overflow(&self) -> bool {
        self.total_ratio() > RATIO_FULL
    }

    #[must_use]
    pub fn has_loss_overflow(&self) -> bool {
        self.entries.iter().any(|e| e.loss.exceeds_full())
    }

    /// Insertion-ordered view for display.
    #[must_use]
    pub fn entries(&self) -> &[CompositionEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, component_id: &ComponentId) -> Option<&CompositionEntry> {
        self.entries.iter().find(|e| e.component_id == *component_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_mut(
        &mut self,
        component_id: &ComponentId,
    ) -> Result<&mut CompositionEntry, CompositionError> {
        self.entries
            .iter_mut()
            .find(|e| e.component_id == *component_id)
            .ok_or_else(|| CompositionError::NotFound(component_id.clone()))
    }
}
