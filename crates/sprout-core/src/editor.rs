use crate::color::branch_colors;
use crate::command::{self, Command, Context};
use crate::config::SproutConfig;
use crate::document::MindMapDocument;
use crate::ids::{IdFactory, UuidIds};
use crate::mutation;
use crate::outline;
use indexmap::IndexMap;
use sprout_graph::MindMap;
use sprout_layout::{Viewport, layout};

#[derive(Debug, Clone, PartialEq, Eq)]
struct EditSession {
    node: String,
    /// Label before editing started, restored by [`Editor::cancel_edit`].
    original: String,
}

/// Holds the current map for one UI surface and applies commands to it.
///
/// Label editing is exclusive: starting an edit on one node commits any edit in progress on
/// another. Structural commands commit a pending edit before they run.
pub struct Editor {
    map: MindMap,
    viewport: Viewport,
    config: SproutConfig,
    ids: Box<dyn IdFactory + Send>,
    editing: Option<EditSession>,
}

impl Editor {
    /// An editor holding a lone root node.
    pub fn new(config: SproutConfig, viewport: Viewport) -> Self {
        let mut ids: Box<dyn IdFactory + Send> = Box::new(UuidIds);
        let map = outline::to_graph(&[], viewport, &config, &mut *ids);
        Self {
            map,
            viewport,
            config,
            ids,
            editing: None,
        }
    }

    /// An editor over an existing map, laid out for `viewport`.
    pub fn with_map(map: MindMap, config: SproutConfig, viewport: Viewport) -> Self {
        let map = layout(&map, viewport, &config.layout);
        Self {
            map,
            viewport,
            config,
            ids: Box::new(UuidIds),
            editing: None,
        }
    }

    pub fn with_ids(mut self, ids: impl IdFactory + Send + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn map(&self) -> &MindMap {
        &self.map
    }

    pub fn into_map(self) -> MindMap {
        self.map
    }

    pub fn config(&self) -> &SproutConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.map.selected_id()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|s| s.node.as_str())
    }

    /// Re-lays the map out for a resized or re-centered canvas.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.map = layout(&self.map, viewport, &self.config.layout);
    }

    /// Applies `command` and returns the resulting selection.
    pub fn apply(&mut self, command: &Command) -> Option<String> {
        self.commit_edit();
        let mut ctx = Context {
            viewport: self.viewport,
            config: &self.config,
            ids: &mut *self.ids,
        };
        let applied = command::apply(&self.map, command, &mut ctx);
        self.map = applied.map;
        applied.selection
    }

    /// Starts editing `node_id`, selecting it. Returns `false` for unknown ids.
    pub fn begin_edit(&mut self, node_id: &str) -> bool {
        if self.editing_id() == Some(node_id) {
            return true;
        }
        self.commit_edit();
        let Some(node) = self.map.node(node_id) else {
            tracing::debug!(node_id, "begin_edit: unknown node, ignoring");
            return false;
        };
        self.editing = Some(EditSession {
            node: node_id.to_string(),
            original: node.label.clone(),
        });
        self.map.select(Some(node_id));
        true
    }

    /// Replaces the label of the node being edited with `text` as typed.
    pub fn edit_text(&mut self, text: &str) {
        let Some(session) = &self.editing else {
            return;
        };
        self.map = mutation::set_label(&self.map, &session.node, text);
    }

    /// Ends the current edit: the label is trimmed, an empty label becomes the placeholder.
    pub fn commit_edit(&mut self) {
        let Some(session) = self.editing.take() else {
            return;
        };
        let Some(text) = self.map.node(&session.node).map(|n| n.label.clone()) else {
            return;
        };
        self.map = mutation::commit_label(
            &self.map,
            &session.node,
            &text,
            &self.config.labels.placeholder,
        );
    }

    /// Ends the current edit and restores the label it started with.
    pub fn cancel_edit(&mut self) {
        let Some(session) = self.editing.take() else {
            return;
        };
        self.map = mutation::set_label(&self.map, &session.node, &session.original);
    }

    pub fn outline_text(&self) -> String {
        outline::outline_text(&self.map)
    }

    /// Rebuilds the whole map from outline text. Ids and selection are not preserved.
    pub fn replace_outline_text(&mut self, text: &str) {
        self.editing = None;
        self.map = outline::from_outline_text(text, self.viewport, &self.config, &mut *self.ids);
    }

    pub fn colors(&self) -> IndexMap<String, String> {
        branch_colors(&self.map, &self.config.palette)
    }

    pub fn document(&self, title: impl Into<String>) -> MindMapDocument {
        MindMapDocument::new(title, self.map.clone())
    }
}
