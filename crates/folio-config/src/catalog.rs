//! Catalog source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON catalog file. Empty means the built-in sample library.
    #[serde(default)]
    pub path: String,
}

impl CatalogConfig {
    /// Whether an external catalog file is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }

    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.is_configured().then(|| PathBuf::from(&self.path))
    }
}
