// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warnings, and errors
    Info,
    /// Debug messages and above (verbose)
    Debug,
    /// All messages including trace (very verbose)
    Trace,
    /// Disable all logging
    Off,
}

impl LogLevel {
    /// Convert to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Catalog registry CLI
#[derive(Parser)]
#[command(name = "catalog-registry")]
#[command(about = "Load connector catalogs from a configuration directory and inspect them")]
#[command(version)]
pub struct Cli {
    /// Set log level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose mode (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by commands that load a catalog directory
#[derive(clap::Args, Debug, Clone)]
pub struct CatalogDirArgs {
    /// Directory holding one <name>.properties file per catalog
    #[arg(long, default_value = "./etc/catalog")]
    pub catalog_dir: PathBuf,

    /// Comma-separated catalogs to skip
    #[arg(long, default_value = "")]
    pub disabled_catalogs: String,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show detailed version information
    Version,

    /// Load every configured catalog and list them
    List {
        #[command(flatten)]
        catalogs: CatalogDirArgs,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one catalog and the schemas of each of its views
    Show {
        /// Catalog name
        name: String,

        #[command(flatten)]
        catalogs: CatalogDirArgs,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_list_command() {
        let cli = Cli::try_parse_from([
            "catalog-registry",
            "-v",
            "list",
            "--catalog-dir",
            "/tmp/catalogs",
            "--disabled-catalogs",
            "a,b",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::List { catalogs, format } => {
                assert_eq!(catalogs.catalog_dir, PathBuf::from("/tmp/catalogs"));
                assert_eq!(catalogs.disabled_catalogs, "a,b");
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected list command"),
        }
    }
}
