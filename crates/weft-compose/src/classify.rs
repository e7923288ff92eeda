// SPDX-License-Identifier: Apache-2.0

use crate::signature::{has_changed, CompositionSignature};
use serde::{Deserialize, Serialize};
use weft_model::CompositionSet;

/// Classification of a pending edit, evaluated once at submit time.
///
/// The UI maps each non-`NoImpact` value to a localized confirmation
/// message; this crate only classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum EditImpact {
    NoImpact,
    NameOnly,
    CompositionOnly,
    Both,
}

impl EditImpact {
    /// Stable message key for the confirmation dialog; `None` means the
    /// save proceeds without one.
    #[must_use]
    pub const fn message_key(self) -> Option<&'static str> {
        match self {
            Self::NoImpact => None,
            Self::NameOnly => Some("item.edit.confirm_name"),
            Self::CompositionOnly => Some("item.edit.confirm_composition"),
            Self::Both => Some("item.edit.confirm_both"),
        }
    }

    /// Composition changes silently alter production formulas already in
    /// use elsewhere, so those outcomes recommend duplicating the record
    /// instead of editing it. A name-only edit is lower risk.
    #[must_use]
    pub const fn recommends_duplicate(self) -> bool {
        matches!(self, Self::CompositionOnly | Self::Both)
    }

    #[must_use]
    pub const fn requires_confirmation(self) -> bool {
        !matches!(self, Self::NoImpact)
    }
}

/// The edit-impact decision table. Name comparison is on trimmed
/// strings: leading/trailing whitespace never counts as a change.
#[must_use]
pub fn classify(
    original_name: &str,
    current_name: &str,
    baseline: &CompositionSignature,
    current: &CompositionSet,
) -> EditImpact {
    let name_changed = original_name.trim() != current_name.trim();
    let composition_changed = has_changed(baseline, current);
    match (name_changed, composition_changed) {
        (false, false) => EditImpact::NoImpact,
        (true, true) => EditImpact::Both,
        (false, true) => EditImpact::CompositionOnly,
        (true, false) => EditImpact::NameOnly,
    }
}
