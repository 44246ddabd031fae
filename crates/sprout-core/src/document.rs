//! Persisted mind map shape: a titled node/edge list with timestamps.
//!
//! Storage itself lives outside this crate; this is only the JSON contract shared with it.

use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sprout_graph::{Edge, MindMap, Node};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapDocument {
    /// Assigned by storage; `None` until the document has been saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Partial update: only the fields that are present are replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MindMapUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Edge>>,
}

impl MindMapDocument {
    pub fn new(title: impl Into<String>, map: MindMap) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            title: title.into(),
            nodes: map.nodes,
            edges: map.edges,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Like [`Self::from_json`], but also rejects maps that are not a single tree.
    pub fn from_json_strict(text: &str) -> Result<Self> {
        let doc = Self::from_json(text)?;
        doc.map().validate()?;
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn map(&self) -> MindMap {
        MindMap::from_parts(self.nodes.clone(), self.edges.clone())
    }

    pub fn into_map(self) -> MindMap {
        MindMap::from_parts(self.nodes, self.edges)
    }

    /// Replaces the graph and bumps `updated_at`.
    pub fn set_map(&mut self, map: MindMap) {
        self.nodes = map.nodes;
        self.edges = map.edges;
        self.touch();
    }

    /// Applies a partial update and bumps `updated_at`.
    pub fn apply_update(&mut self, update: MindMapUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(nodes) = update.nodes {
            self.nodes = nodes;
        }
        if let Some(edges) = update.edges {
            self.edges = edges;
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }
}
