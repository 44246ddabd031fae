//! Read queries over a [`MindMap`].

pub mod index;
mod validate;

use crate::{Edge, MindMap, Node};
use index::TreeIndex;

impl MindMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges.iter().any(|e| e.connects(source, target))
    }

    /// Parent of `id` in the [`TreeIndex`] view: the source of the first usable edge pointing
    /// at it. `None` for the root or an unknown id.
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        let index = self.index();
        let v = index.position(id)?;
        index.parent(v).map(|p| index.id(p))
    }

    /// Children of `id` in the [`TreeIndex`] view, top to bottom.
    ///
    /// Edges with a missing endpoint, self loops and extra incoming edges are not followed.
    pub fn children_of(&self, id: &str) -> Vec<&str> {
        let index = self.index();
        let Some(v) = index.position(id) else {
            return Vec::new();
        };
        index.children(v).iter().map(|&c| index.id(c)).collect()
    }

    /// The first node (in node order) with no incoming edge. Edges whose source is missing do
    /// not count as incoming.
    ///
    /// Falls back to the first node when every node has a parent; `None` for an empty map.
    pub fn root_id(&self) -> Option<&str> {
        self.index().root_id()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.selected)
            .map(|n| n.id.as_str())
    }

    /// Marks `id` as the only selected node. `None` clears the selection.
    ///
    /// An unknown id leaves the selection untouched.
    pub fn select(&mut self, id: Option<&str>) {
        if let Some(id) = id {
            if !self.contains(id) {
                return;
            }
        }
        for n in &mut self.nodes {
            n.selected = Some(n.id.as_str()) == id;
        }
    }

    pub fn index(&self) -> TreeIndex<'_> {
        TreeIndex::new(self)
    }

    /// Pre-order walk from the root with children visited top to bottom.
    ///
    /// Nodes the walk never reaches are appended afterwards in their original order.
    pub fn traversal_order(&self) -> Vec<&str> {
        let index = self.index();
        index
            .traversal_order()
            .into_iter()
            .map(|i| index.id(i))
            .collect()
    }

    /// `id` followed by every descendant, breadth first. Empty when `id` is unknown.
    pub fn subtree_of(&self, id: &str) -> Vec<&str> {
        let index = self.index();
        let Some(start) = index.position(id) else {
            return Vec::new();
        };
        index.subtree(start).into_iter().map(|i| index.id(i)).collect()
    }

    /// Distance (in edges) from the root to `id`, following parent links.
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        let index = self.index();
        let mut cur = index.position(id)?;
        let mut depth = 0usize;
        while let Some(parent) = index.parent(cur) {
            depth += 1;
            if depth > index.len() {
                return None;
            }
            cur = parent;
        }
        (Some(cur) == index.root()).then_some(depth)
    }
}

