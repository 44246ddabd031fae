//! Bottom-up measurements: subtree spans, branch sides and the horizontal step.

use crate::config::{LayoutConfig, Viewport};
use sprout_graph::{Side, TreeIndex};

/// Vertical span of every subtree reached from the root.
///
/// A leaf spans `node_slot`; an internal node spans the sum of its children's spans plus one
/// `sibling_gap` between each pair, floored at `node_slot`. Unreached nodes report `node_slot`.
pub fn subtree_spans(index: &TreeIndex<'_>, config: &LayoutConfig) -> Vec<f64> {
    let mut spans = vec![config.node_slot; index.len()];
    // Reverse pre-order visits every child before its parent.
    for (v, _) in index.preorder().into_iter().rev() {
        spans[v] = children_extent(index.children(v), &spans, config.sibling_gap)
            .max(config.node_slot);
    }
    spans
}

/// Total height of `items` stacked with `gap` between neighbours. `0` when empty.
pub fn children_extent(items: &[usize], spans: &[f64], gap: f64) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let sum: f64 = items.iter().map(|&c| spans[c]).sum();
    sum + gap * (items.len() - 1) as f64
}

/// Side for the `position`-th child of the root (children sorted top to bottom).
///
/// Tagged children keep their side; untagged ones alternate, even positions to the right.
pub fn branch_side(tag: Option<Side>, position: usize) -> Side {
    match tag.and_then(Side::as_branch) {
        Some(side) => side,
        None if position % 2 == 0 => Side::Right,
        None => Side::Left,
    }
}

/// Root children split by side, each list keeping the top-to-bottom order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branches {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl Branches {
    pub fn of(index: &TreeIndex<'_>, root: usize) -> Self {
        let mut branches = Self::default();
        for (position, &child) in index.children(root).iter().enumerate() {
            match branch_side(index.node(child).side, position) {
                Side::Left => branches.left.push(child),
                _ => branches.right.push(child),
            }
        }
        branches
    }

    pub fn on(&self, side: Side) -> &[usize] {
        match side {
            Side::Left => &self.left,
            _ => &self.right,
        }
    }

    /// Levels used on one side: the deepest branch's height plus the branch node itself.
    pub fn depth(&self, side: Side, heights: &[usize]) -> usize {
        self.on(side)
            .iter()
            .map(|&b| heights[b] + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Horizontal distance between consecutive levels.
///
/// Starts from the preferred step and shrinks until the deeper of the two sides fits in its
/// room, then clamps to `min_horizontal_step`.
pub fn horizontal_step(
    config: &LayoutConfig,
    viewport: &Viewport,
    left_depth: usize,
    right_depth: usize,
) -> f64 {
    let mut step = config.horizontal_step;
    for (depth, room) in [
        (left_depth, viewport.left_room(config.margin)),
        (right_depth, viewport.right_room(config.margin)),
    ] {
        if depth == 0 {
            continue;
        }
        let depth = depth as f64;
        if depth * step > room {
            step = room / depth;
        }
    }
    step.max(config.min_horizontal_step)
}
