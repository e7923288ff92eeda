//! UI-boundary helpers. Presentation concerns kept out of the model:
//! the dropdown option list and the advisory validation banners.

use weft_model::{ComponentDescriptor, CompositionEntry, CompositionSet};

/// Ensures a persisted-but-uncataloged selection still renders as an
/// option: if the current entry's component is missing from the
/// cataloged options, a descriptor synthesized from the entry's
/// snapshot fields is appended. Pure; the input order is preserved.
#[must_use]
pub fn options_including(
    mut options: Vec<ComponentDescriptor>,
    current: Option<&CompositionEntry>,
) -> Vec<ComponentDescriptor> {
    if let Some(entry) = current {
        if !options.iter().any(|o| o.id == entry.component_id) {
            options.push(ComponentDescriptor::new(
                entry.component_id.clone(),
                entry.category.clone(),
                entry.component_name.clone(),
                entry.color_label.clone(),
            ));
        }
    }
    options
}

/// The advisory flags the UI polls every render to decide whether to
/// show the over-allocation banners. Never blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banners {
    pub ratio_overflow: bool,
    pub loss_overflow: bool,
}

impl Banners {
    #[must_use]
    pub fn for_set(set: &CompositionSet) -> Self {
        Self {
            ratio_overflow: set.has_ratio_overflow(),
            loss_overflow: set.has_loss_overflow(),
        }
    }

    #[must_use]
    pub fn any(self) -> bool {
        self.ratio_overflow || self.loss_overflow
    }
}
