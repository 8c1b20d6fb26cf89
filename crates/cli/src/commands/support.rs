// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared document loading for the `show`/`preview`/`apply` commands.

use std::path::Path;

use scm_adapters::{AdapterError, FileReader};
use scm_core::SystemConfig;
use scm_document::{parse_document, YamlCodec};
use scm_domain::DomainRegistry;

use crate::exit_error::{code, ExitError};

/// Loads and parses `path`; a missing or unreadable document is a hard
/// error, since a target document is always required.
pub fn load_required(
    reader: &dyn FileReader,
    codec: &dyn YamlCodec,
    registry: &DomainRegistry,
    path: &Path,
) -> anyhow::Result<SystemConfig> {
    let text = reader.read(path).map_err(|err| ExitError::new(code::GENERIC_FAILURE, err.to_string()))?;
    parse_text(codec, registry, &text)
}

/// Loads and parses `path`, treating a missing history file as an
/// empty [`SystemConfig`] (the bootstrap case: nothing has been
/// applied yet).
pub fn load_existing_or_empty(
    reader: &dyn FileReader,
    codec: &dyn YamlCodec,
    registry: &DomainRegistry,
    path: &Path,
) -> anyhow::Result<SystemConfig> {
    match reader.read(path) {
        Ok(text) => parse_text(codec, registry, &text),
        Err(AdapterError::Read { .. }) => Ok(SystemConfig::default()),
        Err(err) => Err(ExitError::new(code::GENERIC_FAILURE, err.to_string()).into()),
    }
}

fn parse_text(codec: &dyn YamlCodec, registry: &DomainRegistry, text: &str) -> anyhow::Result<SystemConfig> {
    let root = codec.decode(text).map_err(|err| ExitError::new(code::PARSE_FAILURE, err.to_string()))?;
    parse_document(&root, registry).map_err(|err| ExitError::new(code::PARSE_FAILURE, err.to_string()).into())
}

#[cfg(test)]
#[path = "support_tests.rs"]
mod tests;
