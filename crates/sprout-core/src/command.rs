//! Command dispatch: one user intent in, one re-laid-out map out.

use crate::config::SproutConfig;
use crate::ids::IdFactory;
use crate::mutation::{self, Direction};
use serde::{Deserialize, Serialize};
use sprout_graph::MindMap;
use sprout_layout::{Viewport, layout};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    AddChild { parent: String },
    AddSibling { node: String },
    Delete { node: String },
    Select { node: String },
    MoveSelection { step: i32 },
    UpdateLabel { node: String, text: String },
}

/// Everything a command needs besides the map itself.
pub struct Context<'a> {
    pub viewport: Viewport,
    pub config: &'a SproutConfig,
    pub ids: &'a mut dyn IdFactory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub map: MindMap,
    pub selection: Option<String>,
}

/// Applies `command` to `map`.
///
/// Structural commands re-run the layout engine before returning. Commands that reference an
/// unknown node, and attempts to delete the root, return the map unchanged.
pub fn apply(map: &MindMap, command: &Command, ctx: &mut Context<'_>) -> Applied {
    match command {
        Command::AddChild { parent } => {
            inserted(mutation::add_child(map, parent, &mut *ctx.ids, ctx.config), map, ctx)
        }
        Command::AddSibling { node } => {
            inserted(mutation::add_sibling(map, node, &mut *ctx.ids, ctx.config), map, ctx)
        }
        Command::Delete { node } => {
            if map.root_id() == Some(node.as_str()) {
                tracing::debug!(node = %node, "delete: the root cannot be deleted");
                return unchanged(map);
            }
            let removed = mutation::remove_node_and_adopt_children(map, node);
            Applied {
                map: layout(&removed.map, ctx.viewport, &ctx.config.layout),
                selection: removed.selection,
            }
        }
        Command::Select { node } => {
            let map = mutation::select(map, node);
            let selection = map.selected_id().map(str::to_string);
            Applied { map, selection }
        }
        Command::MoveSelection { step } => {
            let Some(direction) = Direction::from_step(*step) else {
                return unchanged(map);
            };
            let next = mutation::move_selection(map, map.selected_id(), direction);
            let mut out = map.clone();
            out.select(next.as_deref());
            Applied {
                map: out,
                selection: next,
            }
        }
        Command::UpdateLabel { node, text } => Applied {
            map: mutation::commit_label(map, node, text, &ctx.config.labels.placeholder),
            selection: map.selected_id().map(str::to_string),
        },
    }
}

fn inserted(result: mutation::Inserted, before: &MindMap, ctx: &Context<'_>) -> Applied {
    match result.node_id {
        Some(id) => Applied {
            map: layout(&result.map, ctx.viewport, &ctx.config.layout),
            selection: Some(id),
        },
        None => unchanged(before),
    }
}

fn unchanged(map: &MindMap) -> Applied {
    Applied {
        map: map.clone(),
        selection: map.selected_id().map(str::to_string),
    }
}
