//! Response defaults, loadable from TOML.
//!
//! ```toml
//! status = "200 OK"
//! content_type = "text/html; charset=utf-8"
//!
//! [headers]
//! server = ["relay"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::status::DEFAULT_STATUS_LINE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResponseDefaults {
    /// Status line applied verbatim.
    pub status: String,
    /// `content-type` header; `None` leaves it unset.
    pub content_type: Option<String>,
    /// Extra headers set on every new response.
    pub headers: BTreeMap<String, Vec<String>>,
}

impl Default for ResponseDefaults {
    fn default() -> Self {
        Self {
            status: DEFAULT_STATUS_LINE.to_string(),
            content_type: Some("text/html".to_string()),
            headers: BTreeMap::new(),
        }
    }
}

impl ResponseDefaults {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
