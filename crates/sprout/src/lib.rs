#![forbid(unsafe_code)]

//! `sprout` is a headless mind map core: a tree model, a deterministic left/right balanced
//! layout, structural editing commands and two-way sync with indented outline text.
//!
//! Rendering and storage are left to the host. A typical UI loop owns an [`Editor`], forwards
//! user intents as [`Command`]s and redraws from [`Editor::map`].
//!
//! ```
//! use sprout::{Command, Editor, ROOT_ID, SproutConfig, Viewport};
//!
//! let mut editor = Editor::new(SproutConfig::default(), Viewport::centered(1200.0, 800.0));
//! let child = editor
//!     .apply(&Command::AddChild { parent: ROOT_ID.to_string() })
//!     .expect("root exists");
//! assert!(editor.map().has_edge(ROOT_ID, &child));
//! assert_eq!(editor.outline_text(), "- Central Topic\n  - New Topic");
//! ```

pub use sprout_core::*;

/// Tree model, queries and structural validation.
pub use sprout_graph as graph;

/// Layout internals: subtree spans, branch sides, horizontal step selection.
pub use sprout_layout::span;

/// Parses outline text into a laid-out map using default settings and random node ids.
pub fn map_from_outline(text: &str, viewport: Viewport) -> MindMap {
    outline::from_outline_text(text, viewport, &SproutConfig::default(), &mut UuidIds)
}
