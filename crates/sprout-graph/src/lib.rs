#![forbid(unsafe_code)]

//! Mind map graph model used by `sprout`.
//!
//! A map is a flat list of [`Node`]s plus a flat list of parent→child [`Edge`]s. The tree shape is
//! never stored explicitly; every query derives it from the edge list so callers can hand in
//! whatever they hydrated from storage (including slightly broken data) and still get answers.
//!
//! Queries are best-effort: a missing root falls back to the first node, cycles are cut by a
//! visited set, and nodes that cannot be reached from the root are reported last. Use
//! [`MindMap::validate`] when a strict tree is required.

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::index::TreeIndex;

use serde::{Deserialize, Serialize};

/// Identifier reserved for the root node of maps built from outlines.
pub const ROOT_ID: &str = "root";

/// Which half-plane a node's branch occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    /// Only ever assigned to the root.
    Center,
}

impl Side {
    /// Horizontal direction multiplier (`-1` for left, `+1` for right, `0` for center).
    pub fn direction(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
            Side::Center => 0.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Center => Side::Center,
        }
    }

    /// `left`/`right` tag of a branch, `None` for `center`.
    pub fn as_branch(self) -> Option<Self> {
        match self {
            Side::Center => None,
            side => Some(side),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub label: String,
    /// Owned by the layout engine; anything stored here is overwritten on the next layout pass.
    #[serde(default)]
    pub position: Position,
    /// `None` means "not tagged yet"; the layout engine assigns a side on the next pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(default)]
    pub selected: bool,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: Position::default(),
            side: None,
            selected: false,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn on(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Directed parent→child relation.
///
/// The handle fields are renderer metadata derived by the layout engine (which side of the parent
/// the connector leaves from, and which side of the child it enters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<Side>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<Side>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: edge_id(&source, &target),
            source,
            target,
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn connects(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// Canonical edge id for a `(source, target)` pair.
pub fn edge_id(source: &str, target: &str) -> String {
    format!("e-{source}-{target}")
}

/// A mind map: nodes plus parent→child edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MindMap {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}
