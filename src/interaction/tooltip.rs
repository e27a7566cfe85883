use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{GroupedEntry, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipKind {
    Male,
    Female,
}

impl TooltipKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// The value text of `record` for this kind, exactly as loaded.
    #[must_use]
    pub fn text_of(self, record: &Record) -> &str {
        match self {
            Self::Male => record.male_text(),
            Self::Female => record.female_text(),
        }
    }

    /// Tooltip body for `entry`, taken from its first record.
    #[must_use]
    pub fn text_for(self, entry: &GroupedEntry) -> String {
        self.text_of(entry.first()).to_owned()
    }
}

/// Point the tooltip attaches to, in outer-svg pixel coordinates.
///
/// Tooltips sit north of the hovered element, so this is the element's top center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub x: f64,
    pub y: f64,
}

impl TooltipAnchor {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One floating label. Each instance owns its own visibility and text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipController {
    kind: TooltipKind,
    class_name: String,
    /// `[vertical, horizontal]` shift applied to the anchor.
    offset: [f64; 2],
    visible: bool,
    text: String,
    anchor: TooltipAnchor,
}

impl TooltipController {
    #[must_use]
    pub fn new(kind: TooltipKind, offset: [f64; 2]) -> Self {
        Self {
            kind,
            class_name: "d3-tip".to_owned(),
            offset,
            visible: false,
            text: String::new(),
            anchor: TooltipAnchor::new(0.0, 0.0),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TooltipKind {
        self.kind
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    #[must_use]
    pub fn offset(&self) -> [f64; 2] {
        self.offset
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn anchor(&self) -> TooltipAnchor {
        self.anchor
    }

    /// Bottom-center of the tooltip box after the offset is applied.
    #[must_use]
    pub fn position(&self) -> TooltipAnchor {
        TooltipAnchor::new(self.anchor.x + self.offset[1], self.anchor.y + self.offset[0])
    }

    pub fn show(&mut self, entry: &GroupedEntry, anchor: TooltipAnchor) {
        self.text = self.kind.text_for(entry);
        self.anchor = anchor;
        self.visible = true;
        trace!(
            kind = self.kind.as_str(),
            state = %entry.key,
            text = %self.text,
            "show tooltip"
        );
    }

    pub fn hide(&mut self) {
        self.visible = false;
        trace!(kind = self.kind.as_str(), "hide tooltip");
    }
}
