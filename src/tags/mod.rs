// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device tag parsing and mutation.
//!
//! Tags are opaque strings; a subset follow the `key<delimiter>value`
//! convention and can be viewed as key-value pairs. This module provides:
//!
//! - [`parse_kv_pairs`]: extract the structured subset of a tag list
//! - [`appended`] / [`removed`] / [`replaced`]: pure replacement-list
//!   builders, usable without any API access
//! - [`TagManager`]: fetch-transform-submit operations against a live
//!   device through a [`DeviceApi`](crate::api::DeviceApi) implementation
//!
//! # Examples
//!
//! ```
//! use metaltags::tags::parse_kv_pairs;
//!
//! let tags = vec!["env=prod".to_string(), "rack-7".to_string()];
//! let pairs = parse_kv_pairs(&tags, "=");
//!
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(pairs[0].key, "env");
//! assert_eq!(pairs[0].value, "prod");
//! ```

mod edit;
mod manager;
mod parse;

pub use edit::{appended, removed, replaced};
pub use manager::TagManager;
pub use parse::{KvPair, parse_kv_pairs};

/// Delimiter used when the caller passes an empty one.
pub const DEFAULT_DELIMITER: &str = "=";
