// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Static catalog manager - the catalog registry
//!
//! [`StaticCatalogManager`] holds the authoritative mapping from catalog name
//! to [`CatalogConnector`] and enforces the registry lifecycle:
//!
//! ```text
//! CREATED ──load_initial_catalogs──▶ INITIALIZED
//!    │                                   │
//!    └──────────────stop────────────▶ STOPPED ◀──stop──┘
//! ```
//!
//! Every transition is a single atomic compare-and-set (or swap), so exactly
//! one caller among concurrent competitors performs it. Connector construction
//! always happens outside the map lock; only the final insert-if-absent is
//! done under it, together with a re-check of the lifecycle state.

use super::error::{CatalogError, CatalogResult};
use super::factory::CatalogFactory;
use super::handle::CatalogHandle;
use super::metadata::Catalog;
use super::properties::CatalogProperties;
use super::CatalogConnector;
use crate::config::{discover_catalogs, CatalogRegistryConfig};
use crate::connector::system::{
    is_reserved_catalog_name, GlobalSystemConnector, SYSTEM_CATALOG_HANDLE, SYSTEM_CATALOG_NAME,
};
use crate::connector::ConnectorServices;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

const STATE_CREATED: u8 = 0;
const STATE_INITIALIZED: u8 = 1;
const STATE_STOPPED: u8 = 2;

/// Lifecycle state of the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogManagerState {
    Created,
    Initialized,
    Stopped,
}

impl CatalogManagerState {
    fn from_u8(value: u8) -> Self {
        match value {
            STATE_CREATED => CatalogManagerState::Created,
            STATE_INITIALIZED => CatalogManagerState::Initialized,
            _ => CatalogManagerState::Stopped,
        }
    }
}

impl fmt::Display for CatalogManagerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogManagerState::Created => "CREATED",
            CatalogManagerState::Initialized => "INITIALIZED",
            CatalogManagerState::Stopped => "STOPPED",
        };
        write!(f, "{}", name)
    }
}

/// Catalog lookup used by the rest of the engine
pub trait CatalogManager: Send + Sync {
    /// Snapshot of the registered catalog names
    fn get_catalog_names(&self) -> BTreeSet<String>;

    /// Metadata of a catalog, or `None` if no catalog has that name
    fn get_catalog(&self, catalog_name: &str) -> Option<Arc<Catalog>>;
}

/// Resolves catalog handles to the connector services a query runs against
pub trait ConnectorServicesProvider: Send + Sync {
    /// Connector services for `catalog_handle`
    ///
    /// Unlike [`CatalogManager::get_catalog`], an unknown catalog is an error:
    /// callers only hold handles they expect to be valid.
    fn get_connector_services(
        &self,
        catalog_handle: &CatalogHandle,
    ) -> CatalogResult<Arc<ConnectorServices>>;
}

enum InsertOutcome {
    Inserted,
    Stopped(CatalogConnector),
    Exists(CatalogConnector),
}

/// Catalog registry fed by static configuration
pub struct StaticCatalogManager {
    catalog_factory: Arc<dyn CatalogFactory>,
    catalog_properties: Vec<CatalogProperties>,
    catalogs: RwLock<HashMap<String, CatalogConnector>>,
    state: AtomicU8,
}

impl StaticCatalogManager {
    /// Create a registry from a catalog configuration directory
    ///
    /// Discovery runs here, once; configuration errors fail construction.
    pub fn new(
        catalog_factory: Arc<dyn CatalogFactory>,
        config: &CatalogRegistryConfig,
    ) -> CatalogResult<Self> {
        config.validate()?;
        let catalog_properties = discover_catalogs(config)?;
        Self::with_catalogs(catalog_factory, catalog_properties)
    }

    /// Create a registry from an explicit list of catalog properties
    pub fn with_catalogs(
        catalog_factory: Arc<dyn CatalogFactory>,
        catalog_properties: Vec<CatalogProperties>,
    ) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for properties in &catalog_properties {
            let name = properties.catalog_name();
            if is_reserved_catalog_name(name) {
                return Err(CatalogError::ReservedCatalogName(name.to_string()));
            }
            if !properties.catalog_handle().is_root() {
                return Err(CatalogError::Configuration(format!(
                    "Catalog '{}' must be configured with a root handle",
                    name
                )));
            }
            if !seen.insert(name.to_string()) {
                return Err(CatalogError::Configuration(format!(
                    "Catalog '{}' is configured more than once",
                    name
                )));
            }
        }

        Ok(Self {
            catalog_factory,
            catalog_properties,
            catalogs: RwLock::new(HashMap::new()),
            state: AtomicU8::new(STATE_CREATED),
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> CatalogManagerState {
        CatalogManagerState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Catalogs discovered at construction time
    pub fn catalog_properties(&self) -> &[CatalogProperties] {
        &self.catalog_properties
    }

    /// Create every configured catalog
    ///
    /// Only the first call performs the load; later and concurrent calls
    /// return `Ok(())` immediately. A factory failure is returned as is and
    /// catalogs created earlier in the same pass stay registered. A catalog
    /// already registered under a configured name is kept and the newly built
    /// connector is shut down.
    pub fn load_initial_catalogs(&self) -> CatalogResult<()> {
        if self
            .state
            .compare_exchange(
                STATE_CREATED,
                STATE_INITIALIZED,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_err()
        {
            log::debug!("Initial catalogs already loaded (state {})", self.state());
            return Ok(());
        }

        for properties in &self.catalog_properties {
            let catalog_name = properties.catalog_name();
            log::info!("-- Loading catalog {} --", catalog_name);

            let connector = self.catalog_factory.create_catalog(properties)?;
            match self.insert_if_absent(catalog_name, connector) {
                InsertOutcome::Inserted => {}
                InsertOutcome::Stopped(connector) => {
                    discard(connector, "catalog manager stopped during load");
                    return Err(stopped_error());
                }
                InsertOutcome::Exists(connector) => {
                    // The registered catalog wins; keep loading the rest
                    discard(connector, "catalog already exists");
                    continue;
                }
            }

            log::info!(
                "-- Added catalog {} using connector {} --",
                catalog_name,
                properties.connector_name()
            );
        }
        Ok(())
    }

    /// Shut down every registered connector and clear the registry
    ///
    /// Terminal and idempotent. Shutdown failures are logged per connector
    /// and never prevent the remaining connectors from being shut down.
    pub fn stop(&self) {
        if self.state.swap(STATE_STOPPED, Ordering::AcqRel) == STATE_STOPPED {
            return;
        }

        let drained: Vec<(String, CatalogConnector)> = self.catalogs.write().drain().collect();
        log::debug!("Stopping catalog manager, shutting down {} catalogs", drained.len());

        for (catalog_name, connector) in drained {
            let failures = connector.shutdown();
            if !failures.is_empty() {
                log::error!(
                    "Catalog {} reported {} shutdown failure(s)",
                    catalog_name,
                    failures.len()
                );
            }
        }
    }

    /// Register the built-in system catalog
    ///
    /// Allowed exactly once per registry; a second call is a fatal
    /// configuration error.
    pub fn register_global_system_connector(
        &self,
        connector: Arc<GlobalSystemConnector>,
    ) -> CatalogResult<()> {
        let catalog = self.catalog_factory.create_catalog_for_connector(
            SYSTEM_CATALOG_HANDLE.clone(),
            SYSTEM_CATALOG_NAME,
            connector,
        )?;

        match self.insert_if_absent(SYSTEM_CATALOG_NAME, catalog) {
            InsertOutcome::Inserted => {
                log::info!("Registered global system catalog");
                Ok(())
            }
            InsertOutcome::Stopped(catalog) => {
                discard(catalog, "catalog manager is stopped");
                Err(stopped_error())
            }
            InsertOutcome::Exists(catalog) => {
                discard(catalog, "system catalog already registered");
                Err(CatalogError::SystemCatalogAlreadyRegistered)
            }
        }
    }

    /// Create and register a catalog at runtime
    ///
    /// The connector is built without holding any registry lock and inserted
    /// only if no catalog with that name exists. On conflict the new connector
    /// is shut down and the registry is left unchanged.
    pub fn create_catalog(
        &self,
        catalog_name: &str,
        connector_name: &str,
        properties: BTreeMap<String, String>,
    ) -> CatalogResult<CatalogHandle> {
        if catalog_name.is_empty() {
            return Err(CatalogError::InvalidParameters(
                "catalog name is empty".to_string(),
            ));
        }
        if connector_name.is_empty() {
            return Err(CatalogError::InvalidParameters(
                "connector name is empty".to_string(),
            ));
        }
        if is_reserved_catalog_name(catalog_name) {
            return Err(CatalogError::ReservedCatalogName(catalog_name.to_string()));
        }
        if self.state() == CatalogManagerState::Stopped {
            return Err(stopped_error());
        }

        let catalog_properties = CatalogProperties::new(
            CatalogHandle::root(catalog_name),
            connector_name,
            properties,
        );
        let catalog = self.catalog_factory.create_catalog(&catalog_properties)?;
        let catalog_handle = catalog.catalog_handle().clone();

        match self.insert_if_absent(catalog_name, catalog) {
            InsertOutcome::Inserted => {
                log::info!(
                    "Created catalog {} using connector {}",
                    catalog_name,
                    connector_name
                );
                Ok(catalog_handle)
            }
            InsertOutcome::Stopped(catalog) => {
                discard(catalog, "catalog manager is stopped");
                Err(stopped_error())
            }
            InsertOutcome::Exists(catalog) => {
                discard(catalog, "catalog already exists");
                Err(CatalogError::CatalogAlreadyExists(catalog_name.to_string()))
            }
        }
    }

    pub fn has_catalog(&self, catalog_name: &str) -> bool {
        self.catalogs.read().contains_key(catalog_name)
    }

    pub fn catalog_count(&self) -> usize {
        self.catalogs.read().len()
    }

    // State is re-checked under the write lock: stop() flips the state before
    // draining, so an insert either lands before the drain or sees STOPPED.
    fn insert_if_absent(&self, catalog_name: &str, connector: CatalogConnector) -> InsertOutcome {
        let mut catalogs = self.catalogs.write();
        if self.state.load(Ordering::Acquire) == STATE_STOPPED {
            return InsertOutcome::Stopped(connector);
        }
        match catalogs.entry(catalog_name.to_string()) {
            Entry::Occupied(_) => InsertOutcome::Exists(connector),
            Entry::Vacant(entry) => {
                entry.insert(connector);
                InsertOutcome::Inserted
            }
        }
    }
}

impl CatalogManager for StaticCatalogManager {
    fn get_catalog_names(&self) -> BTreeSet<String> {
        self.catalogs.read().keys().cloned().collect()
    }

    fn get_catalog(&self, catalog_name: &str) -> Option<Arc<Catalog>> {
        self.catalogs
            .read()
            .get(catalog_name)
            .map(CatalogConnector::catalog)
    }
}

impl ConnectorServicesProvider for StaticCatalogManager {
    fn get_connector_services(
        &self,
        catalog_handle: &CatalogHandle,
    ) -> CatalogResult<Arc<ConnectorServices>> {
        let catalogs = self.catalogs.read();
        let connector = catalogs
            .get(catalog_handle.catalog_name())
            .ok_or_else(|| CatalogError::CatalogNotFound(catalog_handle.catalog_name().to_string()))?;
        connector.get_materialized_connector(catalog_handle.handle_type())
    }
}

fn stopped_error() -> CatalogError {
    CatalogError::IllegalState("Catalog manager is stopped".to_string())
}

/// Shut down a connector the registry refused to adopt
fn discard(connector: CatalogConnector, reason: &str) {
    log::warn!(
        "Discarding connector for catalog {}: {}",
        connector.catalog_handle(),
        reason
    );
    connector.shutdown();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::factory::DefaultCatalogFactory;
    use crate::connector::memory::MemoryConnectorFactory;

    fn manager(names: &[&str]) -> StaticCatalogManager {
        let factory = DefaultCatalogFactory::new();
        factory
            .add_connector_factory(Arc::new(MemoryConnectorFactory::with_name("mem")))
            .unwrap();
        let properties = names
            .iter()
            .map(|name| CatalogProperties::new(CatalogHandle::root(*name), "mem", BTreeMap::new()))
            .collect();
        StaticCatalogManager::with_catalogs(Arc::new(factory), properties).unwrap()
    }

    #[test]
    fn test_state_transitions() {
        let manager = manager(&["a"]);
        assert_eq!(manager.state(), CatalogManagerState::Created);

        manager.load_initial_catalogs().unwrap();
        assert_eq!(manager.state(), CatalogManagerState::Initialized);

        manager.stop();
        assert_eq!(manager.state(), CatalogManagerState::Stopped);

        // No reverse transition
        manager.load_initial_catalogs().unwrap();
        assert_eq!(manager.state(), CatalogManagerState::Stopped);
        assert_eq!(manager.catalog_count(), 0);
    }

    #[test]
    fn test_stop_before_load() {
        let manager = manager(&["a", "b"]);
        manager.stop();
        manager.load_initial_catalogs().unwrap();
        assert!(manager.get_catalog_names().is_empty());
    }

    #[test]
    fn test_with_catalogs_rejects_reserved_name() {
        let factory = Arc::new(DefaultCatalogFactory::new());
        let properties = vec![CatalogProperties::new(
            CatalogHandle::root("system"),
            "mem",
            BTreeMap::new(),
        )];
        let err = StaticCatalogManager::with_catalogs(factory, properties).err().unwrap();
        assert_eq!(err, CatalogError::ReservedCatalogName("system".to_string()));
    }

    #[test]
    fn test_with_catalogs_rejects_duplicates() {
        let factory = Arc::new(DefaultCatalogFactory::new());
        let properties = vec![
            CatalogProperties::new(CatalogHandle::root("a"), "mem", BTreeMap::new()),
            CatalogProperties::new(CatalogHandle::root("a"), "mem", BTreeMap::new()),
        ];
        let err = StaticCatalogManager::with_catalogs(factory, properties).err().unwrap();
        assert!(matches!(err, CatalogError::Configuration(_)));
    }

    #[test]
    fn test_create_catalog_validates_input() {
        let manager = manager(&[]);
        assert!(matches!(
            manager.create_catalog("", "mem", BTreeMap::new()),
            Err(CatalogError::InvalidParameters(_))
        ));
        assert!(matches!(
            manager.create_catalog("x", "", BTreeMap::new()),
            Err(CatalogError::InvalidParameters(_))
        ));
        assert_eq!(
            manager.create_catalog("system", "mem", BTreeMap::new()),
            Err(CatalogError::ReservedCatalogName("system".to_string()))
        );
    }

    #[test]
    fn test_state_display() {
        assert_eq!(CatalogManagerState::Initialized.to_string(), "INITIALIZED");
    }
}
