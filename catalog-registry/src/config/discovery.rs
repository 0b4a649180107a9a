// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog discovery from a configuration directory

use super::properties::load_properties_from;
use super::registry_config::CatalogRegistryConfig;
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::handle::CatalogHandle;
use crate::catalog::properties::CatalogProperties;
use crate::connector::system::is_reserved_catalog_name;
use std::path::{Path, PathBuf};

/// Mandatory key naming the connector that backs a catalog
pub const CONNECTOR_NAME_PROPERTY: &str = "connector.name";

const CATALOG_FILE_EXTENSION: &str = "properties";

/// Discover the enabled catalogs declared in the configuration directory
///
/// Files are visited in file-name order. The reserved system catalog name,
/// an unreadable file or a missing `connector.name` fail the whole discovery.
pub fn discover_catalogs(config: &CatalogRegistryConfig) -> CatalogResult<Vec<CatalogProperties>> {
    let mut catalogs = Vec::new();

    for file in list_catalog_files(config.catalog_config_dir())? {
        let catalog_name = match file.file_stem().and_then(|stem| stem.to_str()) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(CatalogError::Configuration(format!(
                    "Invalid catalog file name {}",
                    file.display()
                )))
            }
        };

        if is_reserved_catalog_name(&catalog_name) {
            return Err(CatalogError::ReservedCatalogName(catalog_name));
        }
        if config.is_disabled(&catalog_name) {
            log::info!("Skipping disabled catalog {}", catalog_name);
            continue;
        }

        let mut properties = load_properties_from(&file).map_err(|e| {
            CatalogError::Configuration(format!(
                "Error reading catalog property file {}: {}",
                file.display(),
                e
            ))
        })?;

        let connector_name = properties.remove(CONNECTOR_NAME_PROPERTY).ok_or_else(|| {
            CatalogError::Configuration(format!(
                "Catalog configuration {} does not contain {}",
                absolute(&file).display(),
                CONNECTOR_NAME_PROPERTY
            ))
        })?;

        log::debug!(
            "Discovered catalog {} (connector {}, {} properties)",
            catalog_name,
            connector_name,
            properties.len()
        );
        catalogs.push(CatalogProperties::new(
            CatalogHandle::root(catalog_name),
            connector_name,
            properties,
        ));
    }

    Ok(catalogs)
}

fn list_catalog_files(dir: Option<&Path>) -> CatalogResult<Vec<PathBuf>> {
    let dir = match dir {
        Some(dir) if dir.is_dir() => dir,
        _ => return Ok(Vec::new()),
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| listing_error(dir, e))? {
        let path = entry.map_err(|e| listing_error(dir, e))?.path();
        let is_catalog_file = path.is_file()
            && path
                .extension()
                .map_or(false, |ext| ext == CATALOG_FILE_EXTENSION);
        if is_catalog_file {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn listing_error(dir: &Path, err: std::io::Error) -> CatalogError {
    CatalogError::Configuration(format!(
        "Error listing catalog directory {}: {}",
        dir.display(),
        err
    ))
}

fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
