// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scm-shell: shell-script template interpolation (§4.4), argv
//! quoting, and the two `Executor` implementations (§4.9) actions run
//! through.

pub mod executor;
pub mod quote;
pub mod template;

pub use executor::{CommandFailure, Executor, LiveExecutor, PreviewExecutor};
pub use quote::quote_argv;
pub use template::Interpolation;
