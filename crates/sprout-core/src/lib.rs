#![forbid(unsafe_code)]

//! Mind map editing core.
//!
//! - [`mutation`]: add child/sibling, delete with adoption, selection traversal
//! - [`command`]: one dispatch point for UI intents, re-running layout after structural edits
//! - [`outline`]: indented outline text <-> map
//! - [`color`]: per-branch display colors
//! - [`editor`]: stateful wrapper holding the current map and the label being edited
//! - [`document`]: the persisted JSON shape
//!
//! Apart from [`editor::Editor`], everything here is a pure function of its inputs.

pub mod color;
pub mod command;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod ids;
pub mod mutation;
pub mod outline;

pub use command::{Applied, Command, Context, apply};
pub use config::{Labels, Palette, SproutConfig};
pub use document::{MindMapDocument, MindMapUpdate};
pub use editor::Editor;
pub use error::{Error, Result};
pub use ids::{IdFactory, SequentialIds, UuidIds};
pub use mutation::Direction;
pub use outline::OutlineItem;

pub use sprout_graph::{Edge, MindMap, Node, Position, ROOT_ID, Side, TreeIndex};
pub use sprout_layout::{Bounds, LayoutConfig, Viewport, layout};
