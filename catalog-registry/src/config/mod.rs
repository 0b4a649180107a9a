// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog configuration
//!
//! Catalogs are declared as one `<name>.properties` file per catalog in a
//! configuration directory. Discovery runs once when the registry is built;
//! configuration is never re-read at runtime.

pub mod discovery;
pub mod properties;
pub mod registry_config;

pub use discovery::{discover_catalogs, CONNECTOR_NAME_PROPERTY};
pub use properties::{load_properties_from, parse_properties};
pub use registry_config::CatalogRegistryConfig;
