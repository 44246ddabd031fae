use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use sprout_layout::LayoutConfig;

/// Branch colors. The root gets `root`; each first-level branch takes the next entry of
/// `branches`, cycling when there are more branches than colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub root: String,
    pub branches: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            root: "#475569".to_string(),
            branches: [
                "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4", "#3b82f6", "#8b5cf6",
                "#ec4899",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

impl Palette {
    /// Color of the `section`-th first-level branch.
    pub fn branch(&self, section: usize) -> &str {
        if self.branches.is_empty() {
            return &self.root;
        }
        &self.branches[section % self.branches.len()]
    }
}

/// Default label texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    /// Label of the root created for an empty outline.
    pub root: String,
    /// Label of freshly created nodes, and of nodes whose label is cleared.
    pub placeholder: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            root: "Central Topic".to_string(),
            placeholder: "New Topic".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SproutConfig {
    pub layout: LayoutConfig,
    pub palette: Palette,
    pub labels: Labels,
}

impl SproutConfig {
    /// Parses a (possibly partial) JSON config; missing keys keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = self.layout.invalid_fields();
        if !invalid.is_empty() {
            return Err(Error::InvalidConfig {
                message: format!("layout values out of range: {}", invalid.join(", ")),
            });
        }
        if self.palette.branches.is_empty() {
            return Err(Error::InvalidConfig {
                message: "palette.branches must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
