// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The generic structured-document codec (§1: "YAML read/write, treated
//! as a generic structured-document codec"). `scm-engine`/`scm-cli`
//! depend on the trait, not on `serde_yaml` directly, so the concrete
//! format could be swapped without touching the reconciliation logic.

use scm_core::YamlValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to decode document: {0}")]
    Decode(#[source] serde_yaml::Error),
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_yaml::Error),
}

pub trait YamlCodec {
    fn decode(&self, text: &str) -> Result<YamlValue, CodecError>;
    fn encode(&self, value: &YamlValue) -> Result<String, CodecError>;
}

/// The production codec: `YamlValue` derives `Serialize`/`Deserialize`
/// directly (§ambient stack), so this is a thin wrapper over
/// `serde_yaml`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeYamlCodec;

impl YamlCodec for SerdeYamlCodec {
    fn decode(&self, text: &str) -> Result<YamlValue, CodecError> {
        if text.trim().is_empty() {
            return Ok(YamlValue::Null);
        }
        serde_yaml::from_str(text).map_err(CodecError::Decode)
    }

    fn encode(&self, value: &YamlValue) -> Result<String, CodecError> {
        serde_yaml::to_string(value).map_err(CodecError::Encode)
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
