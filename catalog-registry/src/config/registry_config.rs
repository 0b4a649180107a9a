// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Registry configuration

use crate::catalog::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration consumed by [`crate::StaticCatalogManager::new`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogRegistryConfig {
    /// Directory holding one `<name>.properties` file per catalog
    pub catalog_config_dir: Option<PathBuf>,

    /// Catalogs skipped entirely even though their file exists
    pub disabled_catalogs: Vec<String>,
}

impl CatalogRegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.catalog_config_dir = Some(dir.into());
        self
    }

    pub fn with_disabled_catalogs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_catalogs = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn catalog_config_dir(&self) -> Option<&Path> {
        self.catalog_config_dir.as_deref()
    }

    pub fn is_disabled(&self, catalog_name: &str) -> bool {
        self.disabled_catalogs.iter().any(|name| name == catalog_name)
    }

    /// Parse a comma-separated disabled-catalogs list (`"a, b"`)
    pub fn parse_disabled_catalogs(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> CatalogResult<()> {
        if let Some(name) = self
            .disabled_catalogs
            .iter()
            .find(|name| name.trim().is_empty())
        {
            return Err(CatalogError::Configuration(format!(
                "Disabled catalog list contains an empty name: {:?}",
                name
            )));
        }
        Ok(())
    }
}
