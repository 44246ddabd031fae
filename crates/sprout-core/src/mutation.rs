//! Structural edits.
//!
//! Every function takes the current map by reference and returns a new one. Positions written
//! here are provisional: callers run the layout engine right after (see [`crate::command::apply`]).
//! A command that references an unknown node is a no-op, not an error: the UI can race a delete
//! against a pending command and simply retry.

use crate::config::SproutConfig;
use crate::ids::{IdFactory, fresh_id};
use rustc_hash::FxHashSet;
use sprout_graph::{Edge, MindMap, Node, Position, Side};
use sprout_layout::span::branch_side;

/// Result of an insertion. `node_id` is `None` when nothing was inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Inserted {
    pub map: MindMap,
    pub node_id: Option<String>,
}

/// Result of a deletion, with the node that should be selected next.
#[derive(Debug, Clone, PartialEq)]
pub struct Removed {
    pub map: MindMap,
    pub selection: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// `+1` / `-1` style step, as sent by keyboard handlers. `0` is not a direction.
    pub fn from_step(step: i32) -> Option<Self> {
        match step.signum() {
            1 => Some(Direction::Next),
            -1 => Some(Direction::Previous),
            _ => None,
        }
    }
}

/// Appends a placeholder child under `parent_id` and selects it.
///
/// A new first-level branch gets its side from the alternation rule applied to its position
/// among the root's children; deeper nodes take their parent's side. The node is placed one
/// step outward from the parent and just below its lowest child, so it sorts last.
pub fn add_child(
    map: &MindMap,
    parent_id: &str,
    ids: &mut dyn IdFactory,
    config: &SproutConfig,
) -> Inserted {
    let index = map.index();
    let Some(parent) = index.position(parent_id) else {
        tracing::debug!(parent_id, "add_child: unknown parent, ignoring");
        return Inserted {
            map: map.clone(),
            node_id: None,
        };
    };
    let parent_node = index.node(parent);
    let siblings = index.children(parent);

    let side = if index.is_root(parent) {
        Some(branch_side(None, siblings.len()))
    } else {
        parent_node.side.and_then(Side::as_branch)
    };

    let dx = side.unwrap_or(Side::Right).direction() * config.layout.horizontal_step;
    let y = siblings
        .iter()
        .map(|&c| index.node(c).position.y + config.layout.node_slot)
        .fold(parent_node.position.y, f64::max);
    let position = Position::new(parent_node.position.x + dx, y);

    let id = fresh_id(ids, |id| map.contains(id));
    let mut out = map.clone();
    out.select(None);
    out.nodes.push(Node {
        id: id.clone(),
        label: config.labels.placeholder.clone(),
        position,
        side,
        selected: true,
    });
    out.edges.push(Edge::new(parent_id, id.clone()));

    Inserted {
        map: out,
        node_id: Some(id),
    }
}

/// Adds a child to `node_id`'s parent. No-op for the root and for unknown ids.
pub fn add_sibling(
    map: &MindMap,
    node_id: &str,
    ids: &mut dyn IdFactory,
    config: &SproutConfig,
) -> Inserted {
    let index = map.index();
    let parent = index.position(node_id).and_then(|v| index.parent(v));
    match parent {
        Some(parent) => add_child(map, index.id(parent), ids, config),
        None => {
            tracing::debug!(node_id, "add_sibling: node has no parent, ignoring");
            Inserted {
                map: map.clone(),
                node_id: None,
            }
        }
    }
}

/// Deletes `node_id` together with its whole subtree and every edge touching it.
///
/// The root is never removed. The former parent becomes the selection.
pub fn remove_subtree(map: &MindMap, node_id: &str) -> Removed {
    let index = map.index();
    let Some(v) = index.position(node_id) else {
        tracing::debug!(node_id, "remove_subtree: unknown node, ignoring");
        return unchanged(map);
    };
    if index.is_root(v) {
        tracing::debug!(node_id, "remove_subtree: refusing to remove the root");
        return unchanged(map);
    }

    let doomed: FxHashSet<&str> = index.subtree(v).into_iter().map(|i| index.id(i)).collect();
    let selection = index.parent(v).map(|p| index.id(p).to_string());

    let mut out = MindMap::from_parts(
        map.nodes
            .iter()
            .filter(|n| !doomed.contains(n.id.as_str()))
            .cloned()
            .collect(),
        map.edges
            .iter()
            .filter(|e| !doomed.contains(e.source.as_str()) && !doomed.contains(e.target.as_str()))
            .cloned()
            .collect(),
    );
    let selection = selection.or_else(|| out.nodes.first().map(|n| n.id.clone()));
    out.select(selection.as_deref());
    Removed {
        map: out,
        selection,
    }
}

/// Deletes only `node_id`; its children are re-attached to its former parent.
///
/// An adoption edge is skipped when the parent already points at that child. The former parent
/// becomes the selection; if the node had no parent (a detached node in a malformed map) the
/// first remaining node is selected instead, or nothing when the map is now empty.
/// The root is never removed.
pub fn remove_node_and_adopt_children(map: &MindMap, node_id: &str) -> Removed {
    let index = map.index();
    let Some(v) = index.position(node_id) else {
        tracing::debug!(node_id, "remove_node: unknown node, ignoring");
        return unchanged(map);
    };
    if index.is_root(v) {
        tracing::debug!(node_id, "remove_node: refusing to remove the root");
        return unchanged(map);
    }
    let parent = index.parent(v).map(|p| index.id(p).to_string());

    let nodes: Vec<Node> = map
        .nodes
        .iter()
        .filter(|n| n.id != node_id)
        .cloned()
        .collect();
    let mut edges: Vec<Edge> = map
        .edges
        .iter()
        .filter(|e| !e.touches(node_id))
        .cloned()
        .collect();

    if let Some(parent) = &parent {
        for child in map.children_of(node_id) {
            if child == node_id || child == parent.as_str() {
                continue;
            }
            if edges.iter().any(|e| e.connects(parent, child)) {
                continue;
            }
            edges.push(Edge::new(parent.as_str(), child));
        }
    }

    let mut out = MindMap::from_parts(nodes, edges);
    let selection = parent.or_else(|| out.nodes.first().map(|n| n.id.clone()));
    out.select(selection.as_deref());
    Removed {
        map: out,
        selection,
    }
}

/// Next or previous node in traversal order, clamped at both ends.
///
/// Without a (known) current node the walk starts at the root.
pub fn move_selection(map: &MindMap, current: Option<&str>, direction: Direction) -> Option<String> {
    let order = map.traversal_order();
    let last = order.len().checked_sub(1)?;
    let at = current.and_then(|id| order.iter().position(|o| *o == id));
    let next = match (at, direction) {
        (None, _) => 0,
        (Some(i), Direction::Next) => (i + 1).min(last),
        (Some(i), Direction::Previous) => i.saturating_sub(1),
    };
    Some(order[next].to_string())
}

/// Selects `node_id` exclusively. Unknown ids leave the map untouched.
pub fn select(map: &MindMap, node_id: &str) -> MindMap {
    let mut out = map.clone();
    out.select(Some(node_id));
    out
}

/// Final label text: trimmed, or the placeholder when nothing is left.
pub fn committed_label(text: &str, placeholder: &str) -> String {
    match text.trim() {
        "" => placeholder.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Stores `text` verbatim as the label of `node_id` (in-progress edit).
pub fn set_label(map: &MindMap, node_id: &str, text: &str) -> MindMap {
    let mut out = map.clone();
    match out.node_mut(node_id) {
        Some(node) => node.label = text.to_string(),
        None => tracing::debug!(node_id, "set_label: unknown node, ignoring"),
    }
    out
}

/// Stores the committed form of `text` as the label of `node_id`.
pub fn commit_label(map: &MindMap, node_id: &str, text: &str, placeholder: &str) -> MindMap {
    set_label(map, node_id, &committed_label(text, placeholder))
}

fn unchanged(map: &MindMap) -> Removed {
    Removed {
        map: map.clone(),
        selection: map.selected_id().map(str::to_string),
    }
}
