#![forbid(unsafe_code)]

//! Headless, deterministic mind map layout.
//!
//! The root sits on the viewport center, first-level branches are balanced to its left and
//! right, and every subtree receives a vertical slice sized bottom-up so siblings never overlap.
//! The engine keeps no state between calls: the same map, viewport and config always produce
//! the same positions, bit for bit.

pub mod config;
mod engine;
pub mod span;

pub use config::{LayoutConfig, Viewport};
pub use engine::layout;

use serde::{Deserialize, Serialize};
use sprout_graph::MindMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    /// Bounding box of node centers.
    pub fn of(map: &MindMap) -> Option<Self> {
        Self::from_points(map.nodes.iter().map(|n| (n.position.x, n.position.y)))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
