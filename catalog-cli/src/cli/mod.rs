// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for the catalog registry
//!
//! Brings up a registry from a catalog configuration directory and reports
//! what was loaded.

pub mod commands;
pub mod output;
pub mod registry;

pub use commands::{Cli, Commands};
pub use registry::{handle_list, handle_show};
