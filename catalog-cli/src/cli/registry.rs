// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Command handlers that bring up a registry from a catalog directory

use super::commands::{CatalogDirArgs, OutputFormat};
use super::output::{CatalogFormatter, ViewSchemas};
use catalog_registry::{
    Catalog, CatalogManager, CatalogRegistryConfig, ConnectorServicesProvider,
    DefaultCatalogFactory, GlobalSystemConnector, MemoryConnectorFactory, StaticCatalogManager,
};
use std::error::Error;
use std::sync::Arc;

/// Build a registry over the catalog directory and load every catalog
///
/// The memory connector is the only connector available from the CLI.
pub fn bring_up(args: &CatalogDirArgs) -> Result<StaticCatalogManager, Box<dyn Error>> {
    let factory = DefaultCatalogFactory::new();
    factory.add_connector_factory(Arc::new(MemoryConnectorFactory::new()))?;

    let config = CatalogRegistryConfig::new()
        .with_catalog_config_dir(&args.catalog_dir)
        .with_disabled_catalogs(CatalogRegistryConfig::parse_disabled_catalogs(
            &args.disabled_catalogs,
        ));
    log::debug!("Catalog registry config: {:?}", config);

    let manager = StaticCatalogManager::new(Arc::new(factory), &config)?;
    manager.register_global_system_connector(Arc::new(GlobalSystemConnector::new()))?;

    if let Err(e) = manager.load_initial_catalogs() {
        manager.stop();
        return Err(e.into());
    }
    Ok(manager)
}

/// Handle the `list` command
pub fn handle_list(args: CatalogDirArgs, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let manager = bring_up(&args)?;

    let catalogs: Vec<Arc<Catalog>> = manager
        .get_catalog_names()
        .iter()
        .filter_map(|name| manager.get_catalog(name))
        .collect();
    print!("{}", CatalogFormatter::format_catalogs(&catalogs, format));

    manager.stop();
    Ok(())
}

/// Handle the `show` command
pub fn handle_show(
    name: String,
    args: CatalogDirArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let manager = bring_up(&args)?;

    let result = describe(&manager, &name);
    manager.stop();

    match result? {
        Some((catalog, views)) => {
            print!("{}", CatalogFormatter::format_catalog(&catalog, &views, format));
            Ok(())
        }
        None => Err(format!("Catalog '{}' not found", name).into()),
    }
}

type Description = (Arc<Catalog>, Vec<ViewSchemas>);

fn describe(
    manager: &StaticCatalogManager,
    name: &str,
) -> Result<Option<Description>, Box<dyn Error>> {
    let catalog = match manager.get_catalog(name) {
        Some(catalog) => catalog,
        None => return Ok(None),
    };

    let mut views = Vec::new();
    for handle_type in catalog.handle_types() {
        let handle = catalog.catalog_handle().with_type(*handle_type);
        let services = manager.get_connector_services(&handle)?;
        views.push(ViewSchemas {
            handle_type: *handle_type,
            schemas: services.connector().list_schema_names(),
        });
    }
    Ok(Some((catalog, views)))
}
