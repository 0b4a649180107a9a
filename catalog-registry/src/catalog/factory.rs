// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog factory
//!
//! Turns [`CatalogProperties`] into a live [`CatalogConnector`]. The default
//! implementation dispatches on the connector name to a registered
//! [`ConnectorFactory`] and materializes the derived information schema and
//! system tables views around the connector it builds.

use super::error::{CatalogError, CatalogResult};
use super::handle::CatalogHandle;
use super::properties::CatalogProperties;
use super::CatalogConnector;
use crate::connector::information_schema::{InformationSchemaConnector, SystemTablesConnector};
use crate::connector::{Connector, ConnectorFactory, ConnectorServices};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Builds catalog connectors for the registry
///
/// Implementations must be safe to call concurrently for distinct catalogs.
/// Construction may be slow and may fail; the registry never retries.
pub trait CatalogFactory: Send + Sync {
    /// Build a catalog from discovered or dynamically supplied properties
    fn create_catalog(&self, properties: &CatalogProperties) -> CatalogResult<CatalogConnector>;

    /// Build a catalog around an already constructed connector
    fn create_catalog_for_connector(
        &self,
        catalog_handle: CatalogHandle,
        connector_name: &str,
        connector: Arc<dyn Connector>,
    ) -> CatalogResult<CatalogConnector>;
}

/// Catalog factory backed by a set of named connector factories
pub struct DefaultCatalogFactory {
    connector_factories: RwLock<HashMap<String, Arc<dyn ConnectorFactory>>>,
}

impl DefaultCatalogFactory {
    pub fn new() -> Self {
        Self {
            connector_factories: RwLock::new(HashMap::new()),
        }
    }

    /// Register a connector factory under its name
    pub fn add_connector_factory(&self, factory: Arc<dyn ConnectorFactory>) -> CatalogResult<()> {
        let name = factory.name().to_string();
        let mut factories = self.connector_factories.write();
        if factories.contains_key(&name) {
            return Err(CatalogError::ConnectorAlreadyExists(name));
        }
        log::debug!("Registered connector factory: {}", name);
        factories.insert(name, factory);
        Ok(())
    }

    pub fn has_connector_factory(&self, name: &str) -> bool {
        self.connector_factories.read().contains_key(name)
    }

    /// Registered connector names, sorted
    pub fn connector_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.connector_factories.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn materialize(
        catalog_handle: CatalogHandle,
        connector_name: &str,
        connector: Arc<dyn Connector>,
    ) -> CatalogResult<CatalogConnector> {
        let catalog_name = catalog_handle.catalog_name().to_string();
        let services = vec![
            ConnectorServices::new(
                catalog_handle.information_schema(),
                Arc::new(InformationSchemaConnector::new(
                    catalog_name.clone(),
                    connector.clone(),
                )),
            ),
            ConnectorServices::new(
                catalog_handle.system_tables(),
                Arc::new(SystemTablesConnector::new(catalog_name)),
            ),
            ConnectorServices::new(catalog_handle.clone(), connector),
        ];
        CatalogConnector::new(catalog_handle, connector_name, services)
    }
}

impl Default for DefaultCatalogFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFactory for DefaultCatalogFactory {
    fn create_catalog(&self, properties: &CatalogProperties) -> CatalogResult<CatalogConnector> {
        // Clone the factory out so a slow connector never holds the lock
        let factory = self
            .connector_factories
            .read()
            .get(properties.connector_name())
            .cloned()
            .ok_or_else(|| CatalogError::ConnectorNotFound(properties.connector_name().to_string()))?;

        let connector = factory
            .create(properties.catalog_name(), properties.properties())
            .map_err(|e| match e {
                CatalogError::ConnectorFailed { .. } => e,
                other => CatalogError::ConnectorFailed {
                    catalog: properties.catalog_name().to_string(),
                    message: other.to_string(),
                },
            })?;

        Self::materialize(
            properties.catalog_handle().clone(),
            properties.connector_name(),
            connector,
        )
    }

    fn create_catalog_for_connector(
        &self,
        catalog_handle: CatalogHandle,
        connector_name: &str,
        connector: Arc<dyn Connector>,
    ) -> CatalogResult<CatalogConnector> {
        Self::materialize(catalog_handle, connector_name, connector)
    }
}
