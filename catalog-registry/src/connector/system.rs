// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Global system connector
//!
//! The built-in `system` catalog exposes engine-internal metadata. Its name is
//! reserved: config discovery and dynamic creation reject it, and it is wired
//! into the registry only through `register_global_system_connector`.

use super::Connector;
use crate::catalog::handle::CatalogHandle;
use once_cell::sync::Lazy;

/// Reserved name of the built-in system catalog
pub const SYSTEM_CATALOG_NAME: &str = "system";

/// Root handle of the built-in system catalog
pub static SYSTEM_CATALOG_HANDLE: Lazy<CatalogHandle> =
    Lazy::new(|| CatalogHandle::root(SYSTEM_CATALOG_NAME));

const SYSTEM_SCHEMAS: [&str; 3] = ["jdbc", "metadata", "runtime"];

/// Connector backing the built-in system catalog
#[derive(Debug, Default)]
pub struct GlobalSystemConnector;

impl GlobalSystemConnector {
    pub fn new() -> Self {
        Self
    }
}

impl Connector for GlobalSystemConnector {
    fn list_schema_names(&self) -> Vec<String> {
        SYSTEM_SCHEMAS.iter().map(|s| s.to_string()).collect()
    }
}

/// True if `name` is the reserved system catalog name
pub fn is_reserved_catalog_name(name: &str) -> bool {
    name == SYSTEM_CATALOG_NAME
}
