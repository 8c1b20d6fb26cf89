// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level argument parser (§6: `show`/`preview`/`apply`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sysconf", version, about = "Declarative system configuration manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the last applied system configuration
    Show {
        /// Document to render (default: the history file)
        path: Option<PathBuf>,
    },
    /// Print what `apply` would do, without running or persisting anything
    Preview {
        /// Target configuration (default: the config directory's config.yaml)
        config_file: Option<PathBuf>,
        /// Last-applied configuration to diff against (default: the history file)
        #[arg(long = "last-config")]
        last_config: Option<PathBuf>,
    },
    /// Reconcile the system towards the target configuration
    Apply {
        /// Target configuration (default: the config directory's config.yaml)
        config_file: Option<PathBuf>,
        /// Last-applied configuration to diff against (default: the history file)
        #[arg(long = "last-config")]
        last_config: Option<PathBuf>,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
