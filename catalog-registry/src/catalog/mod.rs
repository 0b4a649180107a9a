// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog registry core
//!
//! [`manager::StaticCatalogManager`] is the single authority mapping catalog
//! names to live [`CatalogConnector`]s. Connectors are built by a
//! [`factory::CatalogFactory`] and owned exclusively by the registry entry
//! holding them; callers only ever see [`metadata::Catalog`] views and
//! [`ConnectorServices`].

pub mod error;
pub mod factory;
pub mod handle;
pub mod manager;
pub mod metadata;
pub mod properties;

use crate::connector::ConnectorServices;
use error::{CatalogError, CatalogResult};
use handle::{CatalogHandle, CatalogHandleType};
use metadata::Catalog;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Live bundle of materialized connectors for one catalog
///
/// Holds one [`ConnectorServices`] per handle type plus the shared
/// [`Catalog`] metadata view. Only the registry shuts it down.
pub struct CatalogConnector {
    catalog_handle: CatalogHandle,
    connector_name: String,
    materialized: BTreeMap<CatalogHandleType, Arc<ConnectorServices>>,
    catalog: Arc<Catalog>,
}

impl CatalogConnector {
    /// Assemble a catalog connector from its materialized connectors
    ///
    /// `catalog_handle` must be a root handle, a `Normal` connector must be
    /// present, and every materialized handle must belong to this catalog.
    pub fn new(
        catalog_handle: CatalogHandle,
        connector_name: impl Into<String>,
        services: Vec<ConnectorServices>,
    ) -> CatalogResult<Self> {
        if !catalog_handle.is_root() {
            return Err(CatalogError::InvalidParameters(format!(
                "Catalog connector requires a root handle, got {}",
                catalog_handle
            )));
        }

        let mut materialized = BTreeMap::new();
        for service in services {
            let handle = service.catalog_handle();
            if handle.catalog_name() != catalog_handle.catalog_name() {
                return Err(CatalogError::InvalidParameters(format!(
                    "Connector for {} does not belong to catalog '{}'",
                    handle,
                    catalog_handle.catalog_name()
                )));
            }
            let handle_type = handle.handle_type();
            if materialized.insert(handle_type, Arc::new(service)).is_some() {
                return Err(CatalogError::InvalidParameters(format!(
                    "Duplicate {} connector for catalog '{}'",
                    handle_type,
                    catalog_handle.catalog_name()
                )));
            }
        }

        if !materialized.contains_key(&CatalogHandleType::Normal) {
            return Err(CatalogError::InvalidParameters(format!(
                "Catalog '{}' has no root connector",
                catalog_handle.catalog_name()
            )));
        }

        let connector_name = connector_name.into();
        let catalog = Arc::new(Catalog::new(
            catalog_handle.clone(),
            connector_name.clone(),
            materialized.keys().copied().collect(),
        ));

        Ok(Self {
            catalog_handle,
            connector_name,
            materialized,
            catalog,
        })
    }

    pub fn catalog_handle(&self) -> &CatalogHandle {
        &self.catalog_handle
    }

    pub fn connector_name(&self) -> &str {
        &self.connector_name
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.clone()
    }

    /// Materialized connector serving `handle_type`
    pub fn get_materialized_connector(
        &self,
        handle_type: CatalogHandleType,
    ) -> CatalogResult<Arc<ConnectorServices>> {
        self.materialized
            .get(&handle_type)
            .cloned()
            .ok_or_else(|| CatalogError::HandleTypeNotFound {
                catalog: self.catalog_handle.catalog_name().to_string(),
                handle_type,
            })
    }

    /// Shut down every materialized connector
    ///
    /// A failing connector does not prevent the others from being shut down;
    /// all failures are logged and returned.
    pub fn shutdown(&self) -> Vec<CatalogError> {
        let mut failures = Vec::new();
        for (handle_type, services) in &self.materialized {
            if let Err(e) = services.shutdown() {
                log::error!(
                    "Error shutting down {} connector of catalog '{}': {}",
                    handle_type,
                    self.catalog_handle.catalog_name(),
                    e
                );
                failures.push(e);
            }
        }
        failures
    }
}

impl std::fmt::Debug for CatalogConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConnector")
            .field("catalog_handle", &self.catalog_handle)
            .field("connector_name", &self.connector_name)
            .field("handle_types", &self.catalog.handle_types())
            .finish()
    }
}
