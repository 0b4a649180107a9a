// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Derived connectors materialized alongside every catalog

use super::Connector;
use std::sync::Arc;

pub const INFORMATION_SCHEMA: &str = "information_schema";

/// `information_schema` view of a catalog, answering from the root connector
pub struct InformationSchemaConnector {
    catalog_name: String,
    delegate: Arc<dyn Connector>,
}

impl InformationSchemaConnector {
    pub fn new(catalog_name: impl Into<String>, delegate: Arc<dyn Connector>) -> Self {
        Self {
            catalog_name: catalog_name.into(),
            delegate,
        }
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }

    /// Schemas of the underlying catalog, as listed by `information_schema.schemata`
    pub fn schemata(&self) -> Vec<String> {
        let mut schemas = self.delegate.list_schema_names();
        if !schemas.iter().any(|s| s == INFORMATION_SCHEMA) {
            schemas.push(INFORMATION_SCHEMA.to_string());
        }
        schemas.sort();
        schemas
    }
}

impl Connector for InformationSchemaConnector {
    fn list_schema_names(&self) -> Vec<String> {
        vec![INFORMATION_SCHEMA.to_string()]
    }
}

/// System tables view of a catalog (runtime state rather than user data)
pub struct SystemTablesConnector {
    catalog_name: String,
}

impl SystemTablesConnector {
    pub fn new(catalog_name: impl Into<String>) -> Self {
        Self {
            catalog_name: catalog_name.into(),
        }
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }
}

impl Connector for SystemTablesConnector {
    fn list_schema_names(&self) -> Vec<String> {
        Vec::new()
    }
}
