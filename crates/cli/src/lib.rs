// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sysconf: the `show`/`preview`/`apply` command-line front end over
//! `scm-engine`'s reconciliation, wired to the real filesystem and
//! shell (§6).

pub mod cli;
pub mod commands;
pub mod exit_error;

use scm_adapters::{Defaults, FilesystemFileReader, FilesystemFileWriter, HomeDefaults};
use scm_document::SerdeYamlCodec;
use scm_domain::DomainRegistry;

use cli::{Cli, Command};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let reader = FilesystemFileReader;
    let writer = FilesystemFileWriter;
    let codec = SerdeYamlCodec;
    let registry = DomainRegistry::with_builtins();
    let defaults = HomeDefaults;

    match cli.command {
        Command::Show { path } => {
            let path = path.unwrap_or_else(|| defaults.old_config_path());
            commands::show::handle(&reader, &codec, &registry, &path)
        }
        Command::Preview { config_file, last_config } => {
            let new_path = config_file.unwrap_or_else(|| defaults.new_config_path());
            let old_path = last_config.unwrap_or_else(|| defaults.old_config_path());
            commands::preview::handle(&reader, &codec, &registry, &old_path, &new_path)
        }
        Command::Apply { config_file, last_config } => {
            let new_path = config_file.unwrap_or_else(|| defaults.new_config_path());
            let old_path = last_config.unwrap_or_else(|| defaults.old_config_path());
            commands::apply::handle(&reader, &writer, &codec, &registry, &old_path, &new_path)
        }
    }
}
