// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog handles
//!
//! A handle identifies one materialized view of a catalog independently of the
//! live connector behind it. Every catalog has a root (`Normal`) handle; the
//! information schema and system tables variants are derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which materialized view of a catalog a handle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CatalogHandleType {
    /// Root handle, backed by the user's connector
    Normal,
    /// `information_schema` view over the catalog
    InformationSchema,
    /// Connector-provided system tables
    SystemTables,
}

impl CatalogHandleType {
    /// All handle types, root first
    pub const ALL: [CatalogHandleType; 3] = [
        CatalogHandleType::Normal,
        CatalogHandleType::InformationSchema,
        CatalogHandleType::SystemTables,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogHandleType::Normal => "normal",
            CatalogHandleType::InformationSchema => "information_schema",
            CatalogHandleType::SystemTables => "system_tables",
        }
    }
}

impl fmt::Display for CatalogHandleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies a catalog instance and the view of it being addressed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatalogHandle {
    catalog_name: String,
    handle_type: CatalogHandleType,
}

impl CatalogHandle {
    /// Create the root handle for a catalog
    pub fn root(catalog_name: impl Into<String>) -> Self {
        Self {
            catalog_name: catalog_name.into(),
            handle_type: CatalogHandleType::Normal,
        }
    }

    /// Derive the information schema handle of this catalog
    pub fn information_schema(&self) -> Self {
        self.with_type(CatalogHandleType::InformationSchema)
    }

    /// Derive the system tables handle of this catalog
    pub fn system_tables(&self) -> Self {
        self.with_type(CatalogHandleType::SystemTables)
    }

    /// Same catalog, different view
    pub fn with_type(&self, handle_type: CatalogHandleType) -> Self {
        Self {
            catalog_name: self.catalog_name.clone(),
            handle_type,
        }
    }

    /// Map any handle back to the root handle of its catalog
    pub fn root_handle(&self) -> Self {
        self.with_type(CatalogHandleType::Normal)
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }

    pub fn handle_type(&self) -> CatalogHandleType {
        self.handle_type
    }

    pub fn is_root(&self) -> bool {
        self.handle_type == CatalogHandleType::Normal
    }
}

impl fmt::Display for CatalogHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.handle_type {
            CatalogHandleType::Normal => write!(f, "{}", self.catalog_name),
            other => write!(f, "{}:{}", self.catalog_name, other),
        }
    }
}
