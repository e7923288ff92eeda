use crate::composition::CompositionSet;
use crate::ids::{parse_display_name, ItemId, ParseError};
use serde::{Deserialize, Serialize};

/// How an item is sourced. Direct-purchase items never carry a
/// composition and bypass the edit-impact classifier entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Sourcing {
    Manufactured,
    DirectPurchase,
}

impl Sourcing {
    #[must_use]
    pub const fn is_direct_purchase(self) -> bool {
        matches!(self, Self::DirectPurchase)
    }
}

/// The owning entity of a composition set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ItemRecord {
    pub id: ItemId,
    pub display_name: String,
    pub sourcing: Sourcing,
    pub composition: CompositionSet,
}

impl ItemRecord {
    /// A manufactured item starts with an empty composition; the editor
    /// populates it.
    pub fn new_manufactured(id: ItemId, display_name: &str) -> Result<Self, ParseError> {
        Ok(Self {
            id,
            display_name: parse_display_name(display_name)?,
            sourcing: Sourcing::Manufactured,
            composition: CompositionSet::new(),
        })
    }

    pub fn new_direct_purchase(id: ItemId, display_name: &str) -> Result<Self, ParseError> {
        Ok(Self {
            id,
            display_name: parse_display_name(display_name)?,
            sourcing: Sourcing::DirectPurchase,
            composition: CompositionSet::new(),
        })
    }

    #[must_use]
    pub fn is_direct_purchase(&self) -> bool {
        self.sourcing.is_direct_purchase()
    }
}
