// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `MetalTags` - a Rust library to manage key=value tags on bare-metal
//! cloud devices.
//!
//! Providers attach free-form string tags to device resources. By
//! convention a subset of those tags carry structure: `key=value`, with a
//! configurable delimiter. This library parses that structured subset and
//! mutates a device's tag list through the provider's REST API.
//!
//! # Supported Operations
//!
//! - **Parse**: extract key-value pairs from a device's tags
//! - **Add**: append a tag to a device
//! - **Remove**: drop every occurrence of a tag
//! - **Update**: replace every occurrence of a tag with another
//!
//! Mutations are read-modify-write: the device is fetched, a full
//! replacement tag list is computed, and the list is submitted in a single
//! update call. There is no retry, caching, or conflict detection;
//! concurrent writers to the same device race and the last write wins.
//!
//! # Quick Start
//!
//! ```no_run
//! use metaltags::{ApiConfig, DeviceId, TagManager};
//!
//! #[tokio::main]
//! async fn main() -> metaltags::Result<()> {
//!     let client = ApiConfig::new("https://api.provider.example", "my-token")
//!         .into_client()?;
//!     let manager = TagManager::new(&client);
//!
//!     let id: DeviceId = "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8".parse().unwrap();
//!
//!     manager.add_tag(&id, "env=staging").await?;
//!
//!     for pair in manager.kv_pairs(&id, "=").await? {
//!         println!("{} -> {}", pair.key, pair.value);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Parsing Without a Client
//!
//! Parsing and the replacement-list builders are pure and need no API
//! access:
//!
//! ```
//! use metaltags::tags::{parse_kv_pairs, replaced};
//!
//! let tags = vec!["env=prod".to_string(), "rack-7".to_string()];
//!
//! let pairs = parse_kv_pairs(&tags, "=");
//! assert_eq!(pairs[0].key, "env");
//!
//! let next = replaced(&tags, "env=prod", "env=staging");
//! assert_eq!(next, vec!["env=staging", "rack-7"]);
//! ```

pub mod api;
pub mod device;
pub mod error;
pub mod tags;

pub use api::{ApiClient, ApiConfig, DeviceApi};
pub use device::{Device, DeviceId, DeviceUpdate};
pub use error::{ClientError, Error, Result, TagError};
pub use tags::{DEFAULT_DELIMITER, KvPair, TagManager, parse_kv_pairs};
