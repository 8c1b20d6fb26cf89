// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sysconf apply` — reconcile the system towards the target
//! configuration and persist the result as the new history file.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use scm_adapters::{FileReader, FileWriter};
use scm_document::{render_document, YamlCodec};
use scm_domain::DomainRegistry;
use scm_engine::{PromptUserErrorHandler, SystemManager};
use scm_shell::LiveExecutor;

use crate::commands::support::{load_existing_or_empty, load_required};
use crate::exit_error::{code, ExitError};

pub fn handle(
    reader: &dyn FileReader,
    writer: &dyn FileWriter,
    codec: &dyn YamlCodec,
    registry: &DomainRegistry,
    old_path: &Path,
    new_path: &Path,
) -> anyhow::Result<()> {
    let old_config = load_existing_or_empty(reader, codec, registry, old_path)?;
    let new_config = load_required(reader, codec, registry, new_path)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    // Best-effort: a handler can only be installed once per process,
    // so a second `apply` within the same run just keeps running.
    let _ = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst));

    let executor = LiveExecutor;
    let handler = PromptUserErrorHandler;
    let manager = SystemManager::new(&executor, &handler, registry);
    let report = manager.reconcile(&old_config, &new_config, &|| interrupted.load(Ordering::SeqCst))?;

    let rendered = render_document(&report.config, registry).map_err(|err| ExitError::new(code::GENERIC_FAILURE, err.to_string()))?;
    let text = codec.encode(&rendered).map_err(|err| ExitError::new(code::GENERIC_FAILURE, err.to_string()))?;

    if let Err(err) = writer.write(old_path, &text) {
        eprintln!("failed to persist the applied configuration: {err}");
        eprintln!("--- contents that would have been written to {} ---", old_path.display());
        print!("{text}");
        return Err(ExitError::new(code::GENERIC_FAILURE, "failed to persist applied configuration").into());
    }

    if !report.completed {
        return Err(ExitError::new(code::USER_ABORT, "apply stopped before reconciling every change").into());
    }

    Ok(())
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
