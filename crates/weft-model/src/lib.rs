#![forbid(unsafe_code)]
//! Item-composition model SSOT.
//!
//! Pure validated domain types for the composition editor core: no I/O,
//! no logging, serde-serializable throughout. Behavior (signatures,
//! edit-impact classification, duplication) lives in `weft-compose`.

mod component;
mod composition;
mod ids;
mod item;
mod percent;

pub use component::{CatalogFilter, ComponentDescriptor};
pub use composition::{CompositionEntry, CompositionError, CompositionSet};
pub use ids::{
    parse_component_id, parse_display_name, parse_item_id, ComponentId, ItemId, ParseError,
    ID_MAX_LEN, NAME_MAX_LEN,
};
pub use item::{ItemRecord, Sourcing};
pub use percent::{Percent, RATIO_FULL};

pub const CRATE_NAME: &str = "weft-model";
