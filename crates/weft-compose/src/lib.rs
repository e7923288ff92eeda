#![forbid(unsafe_code)]
//! Composition editing core.
//!
//! Layers the editing behavior on top of `weft-model`: the
//! order-independent composition signature, the submit-time edit-impact
//! classifier, the duplication operator, and the edit-session state
//! holder that ties them together. Catalog, persistence and identity
//! allocation stay behind ports.

mod classify;
mod duplicate;
mod error;
mod memory;
mod ports;
mod session;
mod signature;
mod ui;

pub use classify::{classify, EditImpact};
pub use duplicate::{duplicate, DuplicateFidelity, COPY_SUFFIX};
pub use error::{ComposeError, ComposeErrorCode};
pub use memory::{MemoryCatalog, MemoryStore, SequentialIds};
pub use ports::{CatalogPort, IdPort, StoreError, StorePort};
pub use session::EditSession;
pub use signature::{has_changed, signature_of, CompositionSignature};
pub use ui::{options_including, Banners};

pub const CRATE_NAME: &str = "weft-compose";
