// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scm-document: the version-gated document parser/renderer (§4.8)
//! and the generic YAML codec it runs on top of.

pub mod codec;
pub mod parse;
pub mod render;

pub use codec::{CodecError, SerdeYamlCodec, YamlCodec};
pub use parse::{parse_document, ParseError, DOCUMENT_VERSION};
pub use render::render_document;
