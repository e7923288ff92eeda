// SPDX-License-Identifier: Apache-2.0

use crate::classify::{classify, EditImpact};
use crate::error::{ComposeError, ComposeErrorCode};
use crate::ports::StorePort;
use crate::signature::{signature_of, CompositionSignature};
use tracing::{debug, info};
use weft_model::{ComponentDescriptor, ComponentId, ItemId, ItemRecord, Percent};

/// One edit session over one item record.
///
/// Owns an immutable snapshot of the record as it was opened plus a
/// working copy the UI mutates, and captures the baseline composition
/// signature exactly once at open. Single-threaded by design: nothing is
/// persisted while editing, so cancelling is just dropping the value.
pub struct EditSession {
    original: ItemRecord,
    working: ItemRecord,
    baseline: CompositionSignature,
}

impl EditSession {
    #[must_use]
    pub fn open(record: ItemRecord) -> Self {
        let baseline = signature_of(&record.composition);
        debug!(
            item = %record.id,
            entries = record.composition.len(),
            "edit session opened"
        );
        Self {
            original: record.clone(),
            working: record,
            baseline,
        }
    }

    #[must_use]
    pub fn original(&self) -> &ItemRecord {
        &self.original
    }

    #[must_use]
    pub fn working(&self) -> &ItemRecord {
        &self.working
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.working.display_name = name.into();
    }

    pub fn add_component(&mut self, descriptor: &ComponentDescriptor) -> Result<(), ComposeError> {
        self.guard_composition_edit()?;
        self.working.composition.add(descriptor)?;
        debug!(item = %self.working.id, component = %descriptor.id, "component added");
        Ok(())
    }

    pub fn remove_component(&mut self, component_id: &ComponentId) -> Result<(), ComposeError> {
        self.guard_composition_edit()?;
        self.working.composition.remove(component_id)?;
        debug!(item = %self.working.id, component = %component_id, "component removed");
        Ok(())
    }

    pub fn set_ratio(
        &mut self,
        component_id: &ComponentId,
        ratio: f64,
    ) -> Result<(), ComposeError> {
        self.guard_composition_edit()?;
        let ratio = Percent::new(ratio)?;
        self.working.composition.set_ratio(component_id, ratio)?;
        Ok(())
    }

    pub fn set_loss(&mut self, component_id: &ComponentId, loss: f64) -> Result<(), ComposeError> {
        self.guard_composition_edit()?;
        let loss = Percent::new(loss)?;
        self.working.composition.set_loss(component_id, loss)?;
        Ok(())
    }

    /// Advisory totals polled by the UI on every render. Never blocking.
    #[must_use]
    pub fn total_ratio(&self) -> f64 {
        self.working.composition.total_ratio()
    }

    #[must_use]
    pub fn has_ratio_overflow(&self) -> bool {
        self.working.composition.has_ratio_overflow()
    }

    #[must_use]
    pub fn has_loss_overflow(&self) -> bool {
        self.working.composition.has_loss_overflow()
    }

    /// Classifies the pending edit. Evaluated at submit time, not
    /// continuously. Direct-purchase records never carry a composition,
    /// so for them only the trimmed-name check applies.
    #[must_use]
    pub fn submit(&self) -> EditImpact {
        let impact = if self.working.is_direct_purchase() {
            if self.original.display_name.trim() == self.working.display_name.trim() {
                EditImpact::NoImpact
            } else {
                EditImpact::NameOnly
            }
        } else {
            classify(
                &self.original.display_name,
                &self.working.display_name,
                &self.baseline,
                &self.working.composition,
            )
        };
        info!(item = %self.working.id, ?impact, "edit submitted");
        impact
    }

    /// Persists the working copy. On failure the session (working copy
    /// and baseline) is left untouched so the user can retry without
    /// re-entering data.
    pub fn save(&self, store: &dyn StorePort) -> Result<ItemId, ComposeError> {
        let display_name = weft_model::parse_display_name(&self.working.display_name)?;
        let mut record = self.working.clone();
        record.display_name = display_name;
        let id = store.save(&record)?;
        info!(item = %id, "item record saved");
        Ok(id)
    }

    /// Restores the working copy to the original snapshot. The baseline
    /// signature is unchanged: it was captured once at open and the
    /// original composition still matches it.
    pub fn reset(&mut self) {
        self.working = self.original.clone();
    }

    fn guard_composition_edit(&self) -> Result<(), ComposeError> {
        if self.working.is_direct_purchase() {
            return Err(ComposeError::new(
                ComposeErrorCode::DirectPurchase,
                format!(
                    "item `{}` is direct purchase and carries no composition",
                    self.working.id
                ),
            ));
        }
        Ok(())
    }
}
