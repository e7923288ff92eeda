// SPDX-License-Identifier: Apache-2.0

use crate::ports::IdPort;
use serde::{Deserialize, Serialize};
use weft_model::{CompositionSet, ItemRecord};

/// Marker appended to a duplicate's display name so the copy is
/// visually distinguishable from the source.
pub const COPY_SUFFIX: &str = " (Copy)";

/// How much of the source record a duplicate carries over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DuplicateFidelity {
    /// Deep copy of the composition set; later edits to either record
    /// are independent.
    Detailed,
    /// Fresh empty composition regardless of the source's content.
    Simple,
}

/// Produces an in-memory copy of `source` under a fresh identity.
///
/// Knows nothing about persistence; the caller saves the result. A
/// direct-purchase source has no composition to vary, so both fidelity
/// options behave identically for it.
#[must_use]
pub fn duplicate(source: &ItemRecord, fidelity: DuplicateFidelity, ids: &dyn IdPort) -> ItemRecord {
    let composition = match fidelity {
        DuplicateFidelity::Detailed if !source.is_direct_purchase() => source.composition.clone(),
        _ => CompositionSet::new(),
    };
    let mut copy = source.clone();
    copy.id = ids.next_item_id();
    copy.display_name = format!("{}{COPY_SUFFIX}", source.display_name);
    copy.composition = composition;
    copy
}
