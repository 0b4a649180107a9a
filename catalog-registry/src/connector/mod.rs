// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Connector SPI
//!
//! A [`Connector`] is the pluggable implementation backing a catalog. A
//! [`ConnectorFactory`] builds connectors by name from the connector-specific
//! properties of a catalog. [`ConnectorServices`] pairs a materialized
//! connector with the handle it serves and is what queries resolve through
//! the registry.

pub mod information_schema;
pub mod memory;
pub mod system;

use crate::catalog::error::CatalogResult;
use crate::catalog::handle::CatalogHandle;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A fully constructed, ready-to-use connector instance
pub trait Connector: Send + Sync {
    /// Schemas exposed by this connector
    fn list_schema_names(&self) -> Vec<String>;

    /// Release the connector's resources
    ///
    /// May be called more than once and must tolerate it.
    fn shutdown(&self) -> CatalogResult<()> {
        Ok(())
    }
}

/// Builds connectors of one kind, identified by [`ConnectorFactory::name`]
pub trait ConnectorFactory: Send + Sync {
    /// Connector name matched against `connector.name` in catalog files
    fn name(&self) -> &str;

    /// Create a connector for `catalog_name` from its connector-specific properties
    fn create(
        &self,
        catalog_name: &str,
        config: &BTreeMap<String, String>,
    ) -> CatalogResult<Arc<dyn Connector>>;
}

/// A materialized connector bound to the handle it serves
#[derive(Clone)]
pub struct ConnectorServices {
    catalog_handle: CatalogHandle,
    connector: Arc<dyn Connector>,
}

impl ConnectorServices {
    pub fn new(catalog_handle: CatalogHandle, connector: Arc<dyn Connector>) -> Self {
        Self {
            catalog_handle,
            connector,
        }
    }

    pub fn catalog_handle(&self) -> &CatalogHandle {
        &self.catalog_handle
    }

    pub fn connector(&self) -> &Arc<dyn Connector> {
        &self.connector
    }

    pub fn shutdown(&self) -> CatalogResult<()> {
        self.connector.shutdown()
    }
}

impl fmt::Debug for ConnectorServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorServices")
            .field("catalog_handle", &self.catalog_handle)
            .finish_non_exhaustive()
    }
}
