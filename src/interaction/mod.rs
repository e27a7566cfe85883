mod tooltip;

pub use tooltip::{TooltipAnchor, TooltipController, TooltipKind};

use serde::{Deserialize, Serialize};

/// Links a drawn dot to the tooltip it drives and the grouped entry it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverBinding {
    pub kind: TooltipKind,
    pub entry: usize,
}

impl HoverBinding {
    #[must_use]
    pub const fn new(kind: TooltipKind, entry: usize) -> Self {
        Self { kind, entry }
    }
}

/// Pointer transitions dispatched by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Enter,
    Leave,
}
