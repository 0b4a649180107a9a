// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Read-only catalog metadata handed out to callers

use super::handle::{CatalogHandle, CatalogHandleType};
use serde::{Deserialize, Serialize};

/// Read-only view of a registered catalog
///
/// The registry keeps ownership of the connector; callers share this view
/// through an `Arc` and never reach the connector's lifecycle from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    catalog_name: String,
    catalog_handle: CatalogHandle,
    connector_name: String,
    handle_types: Vec<CatalogHandleType>,
}

impl Catalog {
    pub fn new(
        catalog_handle: CatalogHandle,
        connector_name: impl Into<String>,
        mut handle_types: Vec<CatalogHandleType>,
    ) -> Self {
        handle_types.sort();
        handle_types.dedup();
        Self {
            catalog_name: catalog_handle.catalog_name().to_string(),
            catalog_handle,
            connector_name: connector_name.into(),
            handle_types,
        }
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }

    /// Root handle of the catalog
    pub fn catalog_handle(&self) -> &CatalogHandle {
        &self.catalog_handle
    }

    pub fn connector_name(&self) -> &str {
        &self.connector_name
    }

    /// Materialized views this catalog exposes
    pub fn handle_types(&self) -> &[CatalogHandleType] {
        &self.handle_types
    }

    pub fn has_handle_type(&self, handle_type: CatalogHandleType) -> bool {
        self.handle_types.contains(&handle_type)
    }
}
