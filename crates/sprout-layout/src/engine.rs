use crate::config::{LayoutConfig, Viewport};
use crate::span::{Branches, children_extent, horizontal_step, subtree_spans};
use sprout_graph::{MindMap, Position, Side, TreeIndex};

/// Positions every node of `map` and tags it with a branch side.
///
/// The root lands on the viewport center. Its children are split into a left and a right group
/// (see [`crate::span::branch_side`]); each group is stacked vertically and centered on the
/// root, and every subtree is centered inside the vertical slice its parent hands it.
///
/// Node order, ids, labels and selection are preserved; edges only gain handle metadata.
/// Nodes the walk cannot reach keep their position and are tagged `right`.
pub fn layout(map: &MindMap, viewport: Viewport, config: &LayoutConfig) -> MindMap {
    let index = map.index();
    let Some(root) = index.root() else {
        return map.clone();
    };

    let spans = subtree_spans(&index, config);
    let heights = index.heights();
    let branches = Branches::of(&index, root);
    let step = horizontal_step(
        config,
        &viewport,
        branches.depth(Side::Left, &heights),
        branches.depth(Side::Right, &heights),
    );
    tracing::trace!(
        nodes = index.len(),
        left = branches.left.len(),
        right = branches.right.len(),
        step,
        "mindmap layout"
    );

    let mut placed: Vec<Option<(Position, Side)>> = vec![None; index.len()];
    placed[root] = Some((
        Position::new(viewport.center_x, viewport.center_y),
        Side::Center,
    ));

    let mut placer = Placer {
        index: &index,
        spans: &spans,
        config,
        step,
        placed: &mut placed,
    };
    for side in [Side::Right, Side::Left] {
        let group = branches.on(side);
        if group.is_empty() {
            continue;
        }
        let total = children_extent(group, &spans, config.branch_gap);
        let mut top = viewport.center_y - total / 2.0;
        for &branch in group {
            placer.place(branch, viewport.center_x, top, side);
            top += spans[branch] + config.branch_gap;
        }
    }

    let mut out = map.clone();
    let mut unreached = 0usize;
    for (i, node) in out.nodes.iter_mut().enumerate() {
        match placed[i] {
            Some((position, side)) => {
                node.position = position;
                node.side = Some(side);
            }
            None => {
                unreached += 1;
                node.side = Some(Side::Right);
            }
        }
    }
    if unreached > 0 {
        tracing::warn!(unreached, "mindmap layout: nodes not reachable from the root");
    }

    assign_handles(&mut out, &index);
    out
}

struct Placer<'i, 'a> {
    index: &'i TreeIndex<'a>,
    spans: &'i [f64],
    config: &'i LayoutConfig,
    step: f64,
    placed: &'i mut [Option<(Position, Side)>],
}

impl Placer<'_, '_> {
    /// Places `branch` and its subtree inside the slice starting at `slice_top`.
    fn place(&mut self, branch: usize, parent_x: f64, slice_top: f64, side: Side) {
        let dx = side.direction() * self.step;
        let mut stack = vec![(branch, parent_x, slice_top)];
        while let Some((v, parent_x, slice_top)) = stack.pop() {
            if self.placed[v].is_some() {
                continue;
            }
            let x = parent_x + dx;
            let y = slice_top + self.spans[v] / 2.0;
            self.placed[v] = Some((Position::new(x, y), side));

            let children = self.index.children(v);
            let extent = children_extent(children, self.spans, self.config.sibling_gap);
            let mut top = y - extent / 2.0;
            for &c in children {
                stack.push((c, x, top));
                top += self.spans[c] + self.config.sibling_gap;
            }
        }
    }
}

/// Connector sides for the renderer: edges leave the parent on the child's side and enter the
/// child from the opposite one.
fn assign_handles(out: &mut MindMap, index: &TreeIndex<'_>) {
    let sides: Vec<Option<Side>> = out.nodes.iter().map(|n| n.side).collect();
    for e in &mut out.edges {
        let side = index.position(&e.target).and_then(|t| sides[t]);
        match side.and_then(Side::as_branch) {
            Some(side) => {
                e.source_handle = Some(side);
                e.target_handle = Some(side.opposite());
            }
            None => {
                e.source_handle = None;
                e.target_handle = None;
            }
        }
    }
}
