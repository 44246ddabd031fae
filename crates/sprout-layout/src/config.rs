use serde::{Deserialize, Serialize};

/// Spacing constants for the layout engine. All values are in canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Vertical span of a leaf, and the floor for any subtree.
    pub node_slot: f64,
    /// Gap between sibling subtrees below the first level.
    pub sibling_gap: f64,
    /// Gap between the root's branches stacked on the same side.
    pub branch_gap: f64,
    /// Preferred horizontal distance between a parent and its children.
    pub horizontal_step: f64,
    /// The step never shrinks below this, even when the canvas is too narrow.
    pub min_horizontal_step: f64,
    /// Space kept free at the left and right canvas edges.
    pub margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_slot: 56.0,
            sibling_gap: 16.0,
            branch_gap: 32.0,
            horizontal_step: 220.0,
            min_horizontal_step: 120.0,
            margin: 80.0,
        }
    }
}

impl LayoutConfig {
    /// Names of fields that are not finite or not positive (gaps and margin may be zero).
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let positive = [
            ("nodeSlot", self.node_slot),
            ("horizontalStep", self.horizontal_step),
            ("minHorizontalStep", self.min_horizontal_step),
        ];
        let non_negative = [
            ("siblingGap", self.sibling_gap),
            ("branchGap", self.branch_gap),
            ("margin", self.margin),
        ];
        positive
            .iter()
            .filter(|(_, v)| !(v.is_finite() && *v > 0.0))
            .chain(
                non_negative
                    .iter()
                    .filter(|(_, v)| !(v.is_finite() && *v >= 0.0)),
            )
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Canvas parameters supplied by the renderer on every layout call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
}

impl Viewport {
    pub fn new(center_x: f64, center_y: f64, width: f64) -> Self {
        Self {
            center_x,
            center_y,
            width,
        }
    }

    /// Viewport centered on a `width` x `height` canvas.
    pub fn centered(width: f64, height: f64) -> Self {
        Self::new(width / 2.0, height / 2.0, width)
    }

    /// Horizontal room left of the center, minus the margin.
    pub fn left_room(&self, margin: f64) -> f64 {
        self.center_x - margin
    }

    /// Horizontal room right of the center, minus the margin.
    pub fn right_room(&self, margin: f64) -> f64 {
        self.width - self.center_x - margin
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::centered(1200.0, 800.0)
    }
}
