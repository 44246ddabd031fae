//! Indented outline text <-> mind map.
//!
//! ```text
//! - Root
//!   - A
//!   - B
//!     - B1
//! ```
//!
//! Each line is one node; two leading spaces (or one tab) make one level. Parsing is lenient:
//! blank lines are dropped, a missing bullet is fine, and indentation is normalized so the text
//! always describes a single tree.

use crate::config::SproutConfig;
use crate::ids::{IdFactory, fresh_id};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use sprout_graph::{Edge, MindMap, Node, ROOT_ID};
use sprout_layout::{Viewport, layout};

/// One outline line: label text plus distance from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutlineItem {
    pub text: String,
    pub depth: usize,
}

impl OutlineItem {
    pub fn new(text: impl Into<String>, depth: usize) -> Self {
        Self {
            text: text.into(),
            depth,
        }
    }
}

/// Splits outline text into items with normalized depths.
///
/// The first item always has depth 0. Every later item is clamped to at most one level deeper
/// than the item before it and to at least depth 1, so stray indentation can neither detach a
/// line nor create a second root. Dedents of any size are kept.
pub fn parse(text: &str) -> Vec<OutlineItem> {
    let mut items: Vec<OutlineItem> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let (raw_depth, rest) = split_indent(line);
        let depth = match items.last() {
            None => 0,
            Some(prev) => raw_depth.min(prev.depth + 1).max(1),
        };
        items.push(OutlineItem::new(strip_bullet(rest), depth));
    }
    items
}

/// Renders items as `"  " * depth + "- " + text`, one per line, without a trailing newline.
pub fn serialize(items: &[OutlineItem]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for _ in 0..item.depth {
            out.push_str("  ");
        }
        out.push_str("- ");
        out.push_str(&item.text);
    }
    out
}

/// Builds a laid-out map from outline items.
///
/// The first item becomes the root (id [`ROOT_ID`]); every other item hangs off the nearest
/// preceding item with a smaller depth. Items that find no such ancestor are attached to the
/// root. An empty outline yields a lone root labelled with the configured default.
pub fn to_graph(
    items: &[OutlineItem],
    viewport: Viewport,
    config: &SproutConfig,
    ids: &mut dyn IdFactory,
) -> MindMap {
    let mut map = MindMap::new();
    if items.is_empty() {
        map.nodes.push(Node::new(ROOT_ID, config.labels.root.clone()));
        return layout(&map, viewport, &config.layout);
    }

    let mut used: FxHashSet<String> = FxHashSet::default();
    used.reserve(items.len());
    let mut stack: Vec<(usize, String)> = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let id = if i == 0 {
            ROOT_ID.to_string()
        } else {
            fresh_id(ids, |id| used.contains(id))
        };
        used.insert(id.clone());

        if i > 0 {
            while stack.last().is_some_and(|(depth, _)| *depth >= item.depth) {
                stack.pop();
            }
            let parent = stack.last().map_or(ROOT_ID, |(_, id)| id.as_str());
            map.edges.push(Edge::new(parent, id.as_str()));
        }

        stack.push((item.depth, id.clone()));
        map.nodes.push(Node::new(id, item.text.as_str()));
    }

    layout(&map, viewport, &config.layout)
}

/// Flattens a map into outline items: pre-order from the root, children top to bottom.
///
/// Nodes that are not reachable from the root are left out. Line breaks inside labels are
/// folded into spaces so every node stays on one line.
pub fn to_outline(map: &MindMap) -> Vec<OutlineItem> {
    let index = map.index();
    index
        .preorder()
        .into_iter()
        .map(|(v, depth)| OutlineItem::new(single_line(&index.node(v).label), depth))
        .collect()
}

/// `serialize(to_outline(map))`.
pub fn outline_text(map: &MindMap) -> String {
    serialize(&to_outline(map))
}

/// `to_graph(parse(text))`.
pub fn from_outline_text(
    text: &str,
    viewport: Viewport,
    config: &SproutConfig,
    ids: &mut dyn IdFactory,
) -> MindMap {
    to_graph(&parse(text), viewport, config, ids)
}

/// Raw depth from leading indentation: one level per tab, one per two spaces.
fn split_indent(line: &str) -> (usize, &str) {
    let mut tabs = 0usize;
    let mut spaces = 0usize;
    let mut end = line.len();
    for (idx, ch) in line.char_indices() {
        match ch {
            '\t' => tabs += 1,
            ' ' => spaces += 1,
            _ => {
                end = idx;
                break;
            }
        }
    }
    (tabs + spaces / 2, &line[end..])
}

fn strip_bullet(content: &str) -> String {
    let content = content.trim();
    content
        .strip_prefix(['-', '*'])
        .unwrap_or(content)
        .trim()
        .to_string()
}

fn single_line(label: &str) -> String {
    if !label.contains(['\n', '\r']) {
        return label.to_string();
    }
    label.split(['\n', '\r']).filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ")
}
