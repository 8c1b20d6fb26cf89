// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scm-core: shared data model and generic reconciliation primitives
//! for the system configuration manager.
//!
//! This crate has no knowledge of domains, shell scripts, or YAML
//! files — it defines the value types ([`YamlValue`], [`Path`],
//! [`EntryId`], [`DomainConfigEntry`], [`SystemConfig`]) and the three
//! generic algorithms the reconciliation engine is built from:
//! [`Diff`], [`SequenceTransitioner`], and [`flatten`]/[`build`].

pub mod action;
pub mod diff;
pub mod entry;
pub mod flatten;
pub mod path;
pub mod system_config;
pub mod transition;
pub mod user_domain;
pub mod yaml_value;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use action::{Action, Runnable};
pub use diff::Diff;
pub use entry::{DomainConfigEntry, EntryId};
pub use flatten::{flatten, rebuild, BuildError, FlattenError};
pub use path::Path;
pub use system_config::SystemConfig;
pub use transition::{SequenceTransitioner, TransitionerViolation};
pub use user_domain::{UserDomainKind, UserDomainSpec};
pub use yaml_value::YamlValue;
