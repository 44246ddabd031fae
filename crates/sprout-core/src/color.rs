//! Branch colors.
//!
//! Every first-level branch is a "section" numbered top to bottom; a node's color is the color
//! of the section it belongs to. The root has no section and gets the neutral root color.

use crate::config::Palette;
use indexmap::IndexMap;
use sprout_graph::{MindMap, TreeIndex};

/// Section of every node, in node order.
///
/// `None` for the root. Nodes whose parent chain never reaches the root fall back to section 0.
pub fn sections(map: &MindMap) -> Vec<Option<usize>> {
    let index = map.index();
    let Some(root) = index.root() else {
        return Vec::new();
    };

    let mut section_of_branch = vec![None; index.len()];
    for (section, &branch) in index.children(root).iter().enumerate() {
        section_of_branch[branch] = Some(section);
    }

    (0..index.len())
        .map(|v| {
            if v == root {
                return None;
            }
            Some(branch_of(&index, root, v).and_then(|b| section_of_branch[b]).unwrap_or(0))
        })
        .collect()
}

/// Node id → display color, in node order.
pub fn branch_colors(map: &MindMap, palette: &Palette) -> IndexMap<String, String> {
    map.nodes
        .iter()
        .zip(sections(map))
        .map(|(node, section)| {
            let color = match section {
                None => palette.root.clone(),
                Some(section) => palette.branch(section).to_string(),
            };
            (node.id.clone(), color)
        })
        .collect()
}

/// Walks up from `v` to the ancestor whose parent is the root.
fn branch_of(index: &TreeIndex<'_>, root: usize, v: usize) -> Option<usize> {
    let mut cur = v;
    // A chain longer than the node count means we are going around a cycle.
    for _ in 0..index.len() {
        let parent = index.parent(cur)?;
        if parent == root {
            return Some(cur);
        }
        cur = parent;
    }
    None
}
