// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog registry CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments first to get log level
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if let Some(level) = cli.log_level {
        builder.filter_level(level.to_level_filter());
    } else if std::env::var_os("RUST_LOG").is_none() {
        // Default to Warn unless RUST_LOG is set
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();

    match cli.command {
        Commands::Version => {
            println!(
                "{} {}",
                "Catalog Registry".bold().green(),
                catalog_registry::VERSION
            );
            println!("Connector catalog lifecycle for query engines");
            Ok(())
        }

        Commands::List { catalogs, format } => cli::handle_list(catalogs, format),

        Commands::Show {
            name,
            catalogs,
            format,
        } => cli::handle_show(name, catalogs, format),
    }
}
