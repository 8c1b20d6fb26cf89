// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scm-adapters: the filesystem and default-path collaborators (§6)
//! the CLI wires into the document codec and the reconciliation
//! engine.

pub mod defaults;
pub mod file;

pub use defaults::{Defaults, HomeDefaults};
pub use file::{AdapterError, FileReader, FileWriter, FilesystemFileReader, FilesystemFileWriter};
