// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog formatting for CLI output

use super::commands::OutputFormat;
use catalog_registry::{Catalog, CatalogHandleType};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::sync::Arc;

/// Schemas exposed by one materialized view of a catalog
pub struct ViewSchemas {
    pub handle_type: CatalogHandleType,
    pub schemas: Vec<String>,
}

/// Formatter for catalog listings and details
pub struct CatalogFormatter;

impl CatalogFormatter {
    /// Format a catalog listing in the specified format
    pub fn format_catalogs(catalogs: &[Arc<Catalog>], format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => Self::catalogs_table(catalogs),
            OutputFormat::Json => Self::catalogs_json(catalogs),
        }
    }

    /// Format one catalog with its views in the specified format
    pub fn format_catalog(catalog: &Catalog, views: &[ViewSchemas], format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => Self::catalog_table(catalog, views),
            OutputFormat::Json => Self::catalog_json(catalog, views),
        }
    }

    fn catalogs_table(catalogs: &[Arc<Catalog>]) -> String {
        if catalogs.is_empty() {
            return format!("{}\n", "No catalogs loaded".yellow());
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", "Catalogs".bold().green()));
        output.push_str(&format!("Catalogs loaded: {}\n\n", catalogs.len()));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("catalog").fg(Color::Green),
            Cell::new("connector").fg(Color::Green),
            Cell::new("views").fg(Color::Green),
        ]);

        for catalog in catalogs {
            table.add_row(vec![
                catalog.catalog_name().to_string(),
                catalog.connector_name().to_string(),
                Self::join_handle_types(catalog.handle_types()),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    fn catalogs_json(catalogs: &[Arc<Catalog>]) -> String {
        let entries: Vec<&Catalog> = catalogs.iter().map(|c| c.as_ref()).collect();
        let json = serde_json::json!({
            "status": "success",
            "catalogs": entries,
            "count": entries.len(),
        });
        Self::to_pretty(&json)
    }

    fn catalog_table(catalog: &Catalog, views: &[ViewSchemas]) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Catalog".bold().green(),
            catalog.catalog_name().bold()
        ));
        output.push_str(&format!("Connector: {}\n\n", catalog.connector_name()));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("view").fg(Color::Green),
            Cell::new("handle").fg(Color::Green),
            Cell::new("schemas").fg(Color::Green),
        ]);

        for view in views {
            let handle = catalog.catalog_handle().with_type(view.handle_type);
            let schemas = if view.schemas.is_empty() {
                "-".to_string()
            } else {
                view.schemas.join(", ")
            };
            table.add_row(vec![
                view.handle_type.to_string(),
                handle.to_string(),
                schemas,
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    fn catalog_json(catalog: &Catalog, views: &[ViewSchemas]) -> String {
        let views_json: Vec<serde_json::Value> = views
            .iter()
            .map(|view| {
                serde_json::json!({
                    "handle_type": view.handle_type,
                    "handle": catalog.catalog_handle().with_type(view.handle_type).to_string(),
                    "schemas": view.schemas,
                })
            })
            .collect();

        let json = serde_json::json!({
            "status": "success",
            "catalog": catalog,
            "views": views_json,
        });
        Self::to_pretty(&json)
    }

    fn join_handle_types(handle_types: &[CatalogHandleType]) -> String {
        handle_types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn to_pretty(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| {
            "{\"status\": \"error\", \"error\": \"Could not serialize catalogs to JSON\"}".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_registry::CatalogHandle;

    fn catalog(name: &str) -> Arc<Catalog> {
        Arc::new(Catalog::new(
            CatalogHandle::root(name),
            "memory",
            CatalogHandleType::ALL.to_vec(),
        ))
    }

    #[test]
    fn test_catalogs_json() {
        let output = CatalogFormatter::format_catalogs(&[catalog("a"), catalog("b")], OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["catalogs"][0]["catalog_name"], "a");
        assert_eq!(value["catalogs"][1]["connector_name"], "memory");
    }

    #[test]
    fn test_empty_table() {
        colored::control::set_override(false);
        let output = CatalogFormatter::format_catalogs(&[], OutputFormat::Table);
        assert!(output.contains("No catalogs loaded"));
    }

    #[test]
    fn test_catalog_json_views() {
        let views = vec![ViewSchemas {
            handle_type: CatalogHandleType::InformationSchema,
            schemas: vec!["information_schema".to_string()],
        }];
        let output = CatalogFormatter::format_catalog(&catalog("a"), &views, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["views"][0]["handle"], "a:information_schema");
        assert_eq!(value["views"][0]["schemas"][0], "information_schema");
    }
}
