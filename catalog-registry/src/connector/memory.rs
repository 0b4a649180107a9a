// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory connector for testing and local use

use super::{Connector, ConnectorFactory};
use crate::catalog::error::{CatalogError, CatalogResult};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Default connector name for [`MemoryConnectorFactory`]
pub const MEMORY_CONNECTOR_NAME: &str = "memory";

/// Property listing the schemas a memory catalog exposes
pub const SCHEMAS_PROPERTY: &str = "memory.schemas";

const DEFAULT_SCHEMA: &str = "default";

/// In-memory connector
pub struct MemoryConnector {
    catalog_name: String,
    config: BTreeMap<String, String>,
    schemas: Vec<String>,
    shut_down: AtomicBool,
}

impl MemoryConnector {
    /// Create a memory connector; schemas come from `memory.schemas`
    pub fn new(catalog_name: impl Into<String>, config: BTreeMap<String, String>) -> Self {
        let schemas = match config.get(SCHEMAS_PROPERTY) {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![DEFAULT_SCHEMA.to_string()],
        };

        Self {
            catalog_name: catalog_name.into(),
            config,
            schemas,
            shut_down: AtomicBool::new(false),
        }
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }

    pub fn config(&self) -> &BTreeMap<String, String> {
        &self.config
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }
}

impl Connector for MemoryConnector {
    fn list_schema_names(&self) -> Vec<String> {
        self.schemas.clone()
    }

    fn shutdown(&self) -> CatalogResult<()> {
        if !self.shut_down.swap(true, Ordering::AcqRel) {
            log::debug!("Memory connector for catalog '{}' shut down", self.catalog_name);
        }
        Ok(())
    }
}

/// Factory for [`MemoryConnector`]
pub struct MemoryConnectorFactory {
    name: String,
}

impl MemoryConnectorFactory {
    pub fn new() -> Self {
        Self::with_name(MEMORY_CONNECTOR_NAME)
    }

    /// Register the memory connector under a different connector name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for MemoryConnectorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectorFactory for MemoryConnectorFactory {
    fn name(&self) -> &str {
        &self.name
    }

    fn create(
        &self,
        catalog_name: &str,
        config: &BTreeMap<String, String>,
    ) -> CatalogResult<Arc<dyn Connector>> {
        if let Some(value) = config.get(SCHEMAS_PROPERTY) {
            if value.split(',').all(|s| s.trim().is_empty()) {
                return Err(CatalogError::ConnectorFailed {
                    catalog: catalog_name.to_string(),
                    message: format!("{} must list at least one schema", SCHEMAS_PROPERTY),
                });
            }
        }
        Ok(Arc::new(MemoryConnector::new(catalog_name, config.clone())))
    }
}
