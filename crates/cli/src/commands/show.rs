// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sysconf show` — render a document back out, unchanged in meaning.

use std::path::Path;

use scm_adapters::FileReader;
use scm_document::{render_document, YamlCodec};
use scm_domain::DomainRegistry;

use crate::commands::support::load_required;
use crate::exit_error::{code, ExitError};

pub fn handle(
    reader: &dyn FileReader,
    codec: &dyn YamlCodec,
    registry: &DomainRegistry,
    path: &Path,
) -> anyhow::Result<()> {
    let config = load_required(reader, codec, registry, path)?;
    let rendered = render_document(&config, registry).map_err(|err| ExitError::new(code::GENERIC_FAILURE, err.to_string()))?;
    let text = codec.encode(&rendered).map_err(|err| ExitError::new(code::GENERIC_FAILURE, err.to_string()))?;
    print!("{text}");
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
