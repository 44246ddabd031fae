//! Positional tree view over a [`MindMap`].
//!
//! Building the index is `O(nodes + edges)` plus one sort per child list. Everything downstream
//! (layout, outline conversion, traversal, coloring) works on node positions (`usize`) instead
//! of string ids.

use crate::{MindMap, Node};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Tree view of a map.
///
/// Malformed input is tolerated rather than rejected:
/// - edges with a missing endpoint and self loops are ignored;
/// - when a node has several incoming edges only the first one (edge order) makes it a child;
/// - duplicate node ids resolve to the first node carrying the id;
/// - when every node has a parent, the first node is used as the root.
#[derive(Debug, Clone)]
pub struct TreeIndex<'a> {
    map: &'a MindMap,
    positions: FxHashMap<&'a str, usize>,
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    root: Option<usize>,
}

impl<'a> TreeIndex<'a> {
    pub fn new(map: &'a MindMap) -> Self {
        let nodes = &map.nodes;
        let n = nodes.len();

        let mut positions: FxHashMap<&'a str, usize> = FxHashMap::default();
        positions.reserve(n);
        for (i, node) in nodes.iter().enumerate() {
            positions.entry(node.id.as_str()).or_insert(i);
        }

        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut has_incoming = vec![false; n];
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        for e in &map.edges {
            let (Some(&s), Some(&t)) = (
                positions.get(e.source.as_str()),
                positions.get(e.target.as_str()),
            ) else {
                continue;
            };
            if s == t {
                continue;
            }
            has_incoming[t] = true;
            if parent[t].is_none() {
                parent[t] = Some(s);
                children[s].push(t);
            }
        }

        for list in &mut children {
            list.sort_by(|&a, &b| {
                nodes[a]
                    .position
                    .y
                    .total_cmp(&nodes[b].position.y)
                    .then(a.cmp(&b))
            });
        }

        let root = has_incoming
            .iter()
            .position(|incoming| !incoming)
            .or((n > 0).then_some(0));

        Self {
            map,
            positions,
            parent,
            children,
            root,
        }
    }

    pub fn map(&self) -> &'a MindMap {
        self.map
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn root_id(&self) -> Option<&'a str> {
        self.root.map(|r| self.id(r))
    }

    pub fn is_root(&self, i: usize) -> bool {
        self.root == Some(i)
    }

    pub fn node(&self, i: usize) -> &'a Node {
        &self.map.nodes[i]
    }

    pub fn id(&self, i: usize) -> &'a str {
        self.map.nodes[i].id.as_str()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn parent(&self, i: usize) -> Option<usize> {
        self.parent[i]
    }

    /// Children of `i`, sorted top to bottom (y ascending, node order on ties).
    pub fn children(&self, i: usize) -> &[usize] {
        &self.children[i]
    }

    /// Pre-order walk from the root as `(node, depth)` pairs.
    pub fn preorder(&self) -> Vec<(usize, usize)> {
        match self.root {
            Some(root) => self.preorder_from(root),
            None => Vec::new(),
        }
    }

    /// Pre-order walk from `start` as `(node, depth relative to start)` pairs.
    pub fn preorder_from(&self, start: usize) -> Vec<(usize, usize)> {
        let mut seen = vec![false; self.len()];
        let mut out = Vec::new();
        let mut stack = vec![(start, 0usize)];
        while let Some((v, depth)) = stack.pop() {
            if seen[v] {
                continue;
            }
            seen[v] = true;
            out.push((v, depth));
            for &c in self.children[v].iter().rev() {
                if !seen[c] {
                    stack.push((c, depth + 1));
                }
            }
        }
        out
    }

    /// Pre-order from the root, then every unreached node in original order.
    pub fn traversal_order(&self) -> Vec<usize> {
        let mut seen = vec![false; self.len()];
        let mut out: Vec<usize> = Vec::with_capacity(self.len());
        for (v, _) in self.preorder() {
            seen[v] = true;
            out.push(v);
        }
        out.extend((0..self.len()).filter(|&v| !seen[v]));
        out
    }

    pub fn reachable(&self) -> Vec<bool> {
        let mut seen = vec![false; self.len()];
        for (v, _) in self.preorder() {
            seen[v] = true;
        }
        seen
    }

    /// `start` and all of its descendants, breadth first.
    pub fn subtree(&self, start: usize) -> Vec<usize> {
        let mut seen = vec![false; self.len()];
        let mut out = Vec::new();
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        while let Some(v) = queue.pop_front() {
            out.push(v);
            for &c in &self.children[v] {
                if !seen[c] {
                    seen[c] = true;
                    queue.push_back(c);
                }
            }
        }
        out
    }

    /// Longest downward path (in edges) for every node reached from the root.
    ///
    /// Unreached nodes report `0`.
    pub fn heights(&self) -> Vec<usize> {
        let mut heights = vec![0usize; self.len()];
        for (v, _) in self.preorder().into_iter().rev() {
            heights[v] = self.children[v]
                .iter()
                .map(|&c| heights[c] + 1)
                .max()
                .unwrap_or(0);
        }
        heights
    }
}
