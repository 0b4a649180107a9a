// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog properties produced by config discovery

use super::handle::CatalogHandle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable description of one catalog: its handle, the connector that
/// backs it and the connector-specific properties passed through untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProperties {
    catalog_handle: CatalogHandle,
    connector_name: String,
    properties: BTreeMap<String, String>,
}

impl CatalogProperties {
    pub fn new(
        catalog_handle: CatalogHandle,
        connector_name: impl Into<String>,
        properties: BTreeMap<String, String>,
    ) -> Self {
        Self {
            catalog_handle,
            connector_name: connector_name.into(),
            properties,
        }
    }

    pub fn catalog_handle(&self) -> &CatalogHandle {
        &self.catalog_handle
    }

    pub fn catalog_name(&self) -> &str {
        self.catalog_handle.catalog_name()
    }

    pub fn connector_name(&self) -> &str {
        &self.connector_name
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}
