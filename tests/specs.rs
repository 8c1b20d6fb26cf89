// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-level integration specs for the `sysconf` binary.

#[path = "support.rs"]
mod support;

mod specs {
    mod apply;
    mod preview;
    mod show;
}
