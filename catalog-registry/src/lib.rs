// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog Registry - connector catalog lifecycle for a query engine
//!
//! The registry turns declarative catalog configuration (one `.properties`
//! file per catalog) into live connector instances and owns their lifecycle:
//! bulk bring-up, dynamic addition and shutdown, all safe under concurrent
//! access from query threads.
//!
//! # Usage
//!
//! ```ignore
//! use catalog_registry::{
//!     CatalogRegistryConfig, DefaultCatalogFactory, MemoryConnectorFactory, StaticCatalogManager,
//! };
//! use std::sync::Arc;
//!
//! let factory = Arc::new(DefaultCatalogFactory::new());
//! factory.add_connector_factory(Arc::new(MemoryConnectorFactory::new()))?;
//!
//! let config = CatalogRegistryConfig::new().with_catalog_config_dir("etc/catalog");
//! let manager = StaticCatalogManager::new(factory, &config)?;
//! manager.load_initial_catalogs()?;
//!
//! for name in manager.get_catalog_names() {
//!     println!("{}", name);
//! }
//! manager.stop();
//! ```

pub mod catalog;
pub mod config;
pub mod connector;

pub use catalog::error::{CatalogError, CatalogResult};
pub use catalog::factory::{CatalogFactory, DefaultCatalogFactory};
pub use catalog::handle::{CatalogHandle, CatalogHandleType};
pub use catalog::manager::{
    CatalogManager, CatalogManagerState, ConnectorServicesProvider, StaticCatalogManager,
};
pub use catalog::metadata::Catalog;
pub use catalog::properties::CatalogProperties;
pub use catalog::CatalogConnector;
pub use config::{discover_catalogs, CatalogRegistryConfig};
pub use connector::memory::{MemoryConnector, MemoryConnectorFactory};
pub use connector::system::{GlobalSystemConnector, SYSTEM_CATALOG_HANDLE, SYSTEM_CATALOG_NAME};
pub use connector::{Connector, ConnectorFactory, ConnectorServices};

/// Catalog registry version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Catalog registry crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
