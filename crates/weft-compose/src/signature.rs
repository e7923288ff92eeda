// SPDX-License-Identifier: Apache-2.0

use sha2::{Digest, Sha256};
use weft_model::CompositionSet;

/// Canonical fingerprint of a composition set.
///
/// Used only for equality against a baseline captured at edit-session
/// start; never persisted, never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionSignature(String);

impl CompositionSignature {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Computes the signature: `(component_id, ratio, loss)` tuples sorted
/// so insertion order never matters, joined into one canonical string,
/// then hashed.
///
/// The id token is length-prefixed because component ids are opaque and
/// may themselves contain the tuple delimiters; with the prefix the
/// canonical string decodes to exactly one multiset, so distinct sets
/// cannot share it.
///
/// Pure: never mutates the set.
#[must_use]
pub fn signature_of(set: &CompositionSet) -> CompositionSignature {
    let mut tuples: Vec<String> = set
        .entries()
        .iter()
        .map(|e| {
            let id = e.component_id.as_str();
            format!(
                "{}:{}:{}:{}",
                id.len(),
                id,
                e.ratio.canonical_token(),
                e.loss.canonical_token()
            )
        })
        .collect();
    tuples.sort_unstable();
    let canonical = tuples.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    CompositionSignature(format!("{:x}", hasher.finalize()))
}

#[must_use]
pub fn has_changed(baseline: &CompositionSignature, current: &CompositionSet) -> bool {
    signature_of(current) != *baseline
}
