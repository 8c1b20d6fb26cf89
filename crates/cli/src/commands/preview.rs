// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sysconf preview` — print the plan an `apply` would run, without
//! executing or persisting anything.

use std::path::Path;

use scm_adapters::FileReader;
use scm_document::YamlCodec;
use scm_domain::DomainRegistry;
use scm_engine::{AbortErrorHandler, SystemManager};
use scm_shell::PreviewExecutor;

use crate::commands::support::{load_existing_or_empty, load_required};

pub fn handle(
    reader: &dyn FileReader,
    codec: &dyn YamlCodec,
    registry: &DomainRegistry,
    old_path: &Path,
    new_path: &Path,
) -> anyhow::Result<()> {
    let old_config = load_existing_or_empty(reader, codec, registry, old_path)?;
    let new_config = load_required(reader, codec, registry, new_path)?;

    let executor = PreviewExecutor;
    let handler = AbortErrorHandler;
    let manager = SystemManager::new(&executor, &handler, registry);
    manager.reconcile(&old_config, &new_config, &|| false)?;
    Ok(())
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
