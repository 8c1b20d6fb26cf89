// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scm-engine: the reconciliation engine (§4.10), error handling
//! (§4.11), and the config transitioner (§4.12) that drives a run from
//! one `SystemConfig` to another.

pub mod error_handler;
pub mod plan;
pub mod system_manager;
pub mod transitioner;

pub use error_handler::{AbortErrorHandler, ErrorHandler, Outcome, PromptUserErrorHandler};
pub use plan::{has_work, plan, PlanStep};
pub use system_manager::{ReconcileReport, SystemManager};
pub use transitioner::SystemConfigTransitioner;
