//! Test utilities for catalog registry integration tests
//!
//! Provides a recording connector factory (counts creations, tracks shutdowns,
//! can be told to fail or stall for specific catalogs) and helpers for
//! writing catalog configuration directories.

#![allow(dead_code)]

use catalog_registry::{
    CatalogError, CatalogResult, Connector, ConnectorFactory, DefaultCatalogFactory,
    StaticCatalogManager,
};
use catalog_registry::CatalogRegistryConfig;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Connector that counts how often it was shut down
pub struct TrackedConnector {
    catalog_name: String,
    shutdowns: AtomicUsize,
    fail_shutdown: bool,
}

impl TrackedConnector {
    pub fn shutdown_count(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }
}

impl Connector for TrackedConnector {
    fn list_schema_names(&self) -> Vec<String> {
        vec!["default".to_string()]
    }

    fn shutdown(&self) -> CatalogResult<()> {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
        if self.fail_shutdown {
            return Err(CatalogError::ConnectorFailed {
                catalog: self.catalog_name.clone(),
                message: "shutdown failed".to_string(),
            });
        }
        Ok(())
    }
}

/// Connector factory that records every connector it builds
pub struct RecordingConnectorFactory {
    name: String,
    created: Mutex<Vec<Arc<TrackedConnector>>>,
    create_counts: Mutex<HashMap<String, usize>>,
    fail_create: HashSet<String>,
    fail_shutdown: HashSet<String>,
    create_delay: Option<Duration>,
}

impl RecordingConnectorFactory {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            created: Mutex::new(Vec::new()),
            create_counts: Mutex::new(HashMap::new()),
            fail_create: HashSet::new(),
            fail_shutdown: HashSet::new(),
            create_delay: None,
        }
    }

    /// Fail connector creation for this catalog
    pub fn failing_create(mut self, catalog_name: &str) -> Self {
        self.fail_create.insert(catalog_name.to_string());
        self
    }

    /// Connectors of this catalog fail on shutdown
    pub fn failing_shutdown(mut self, catalog_name: &str) -> Self {
        self.fail_shutdown.insert(catalog_name.to_string());
        self
    }

    /// Stall every creation, to widen race windows
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.create_delay = Some(delay);
        self
    }

    pub fn total_creates(&self) -> usize {
        self.create_counts.lock().values().sum()
    }

    pub fn creates_for(&self, catalog_name: &str) -> usize {
        self.create_counts
            .lock()
            .get(catalog_name)
            .copied()
            .unwrap_or(0)
    }

    pub fn created(&self) -> Vec<Arc<TrackedConnector>> {
        self.created.lock().clone()
    }

    pub fn created_for(&self, catalog_name: &str) -> Vec<Arc<TrackedConnector>> {
        self.created
            .lock()
            .iter()
            .filter(|c| c.catalog_name == catalog_name)
            .cloned()
            .collect()
    }
}

impl ConnectorFactory for RecordingConnectorFactory {
    fn name(&self) -> &str {
        &self.name
    }

    fn create(
        &self,
        catalog_name: &str,
        _config: &BTreeMap<String, String>,
    ) -> CatalogResult<Arc<dyn Connector>> {
        if let Some(delay) = self.create_delay {
            std::thread::sleep(delay);
        }
        *self
            .create_counts
            .lock()
            .entry(catalog_name.to_string())
            .or_insert(0) += 1;

        if self.fail_create.contains(catalog_name) {
            return Err(CatalogError::ConnectorFailed {
                catalog: catalog_name.to_string(),
                message: "connector unavailable".to_string(),
            });
        }

        let connector = Arc::new(TrackedConnector {
            catalog_name: catalog_name.to_string(),
            shutdowns: AtomicUsize::new(0),
            fail_shutdown: self.fail_shutdown.contains(catalog_name),
        });
        self.created.lock().push(connector.clone());
        Ok(connector)
    }
}

/// Catalog factory with the given connector factory registered
pub fn catalog_factory(connector_factory: Arc<RecordingConnectorFactory>) -> Arc<DefaultCatalogFactory> {
    let factory = DefaultCatalogFactory::new();
    factory
        .add_connector_factory(connector_factory)
        .expect("Failed to register connector factory");
    Arc::new(factory)
}

/// Write `<name>.properties` into `dir`
pub fn write_catalog(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(format!("{}.properties", name)), body)
        .expect("Failed to write catalog file");
}

/// Registry over `dir` with a recording `mem` connector
pub fn registry_for_dir(
    dir: &Path,
    disabled: &[&str],
) -> (StaticCatalogManager, Arc<RecordingConnectorFactory>) {
    let connectors = Arc::new(RecordingConnectorFactory::new("mem"));
    let config = CatalogRegistryConfig::new()
        .with_catalog_config_dir(dir)
        .with_disabled_catalogs(disabled.iter().copied());
    let manager = StaticCatalogManager::new(catalog_factory(connectors.clone()), &config)
        .expect("Failed to create catalog manager");
    (manager, connectors)
}

/// Empty registry with a recording `mem` connector
pub fn empty_registry() -> (StaticCatalogManager, Arc<RecordingConnectorFactory>) {
    registry_with(RecordingConnectorFactory::new("mem"))
}

/// Empty registry using the given connector factory
pub fn registry_with(
    connectors: RecordingConnectorFactory,
) -> (StaticCatalogManager, Arc<RecordingConnectorFactory>) {
    let connectors = Arc::new(connectors);
    let manager = StaticCatalogManager::with_catalogs(catalog_factory(connectors.clone()), Vec::new())
        .expect("Failed to create catalog manager");
    (manager, connectors)
}
