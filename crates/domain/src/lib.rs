// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scm-domain: the `Domain` abstraction (§4.5), the built-in domain
//! table (§4.6), user-declared domains (§4.7), and the dconf/gsettings
//! value-encoding grammar.

pub mod domain;
pub mod encoded_map_domain;
pub mod encoding;
pub mod list_domain;
pub mod map_domain;
pub mod registry;

pub use domain::{Domain, DomainError};
pub use encoded_map_domain::EncodedMapDomain;
pub use encoding::encode_value;
pub use list_domain::ShellListDomain;
pub use map_domain::ShellMapDomain;
pub use registry::DomainRegistry;
