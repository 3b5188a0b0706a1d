// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tag operations against live devices.

use crate::api::DeviceApi;
use crate::device::{Device, DeviceId, DeviceUpdate};
use crate::error::TagError;
use crate::tags::{KvPair, edit, parse_kv_pairs};

/// Tag operations over a device API client.
///
/// Every operation is a single fetch-transform-submit sequence: the current
/// device is read, a full replacement tag list is computed, and the list is
/// submitted in one update call. Nothing is cached between operations.
///
/// Operations are not atomic. Concurrent callers mutating the same device
/// race on the read-modify-write; the last submitted list wins.
///
/// # Examples
///
/// ```no_run
/// use metaltags::{ApiConfig, DeviceId, TagManager};
///
/// # async fn example() -> metaltags::Result<()> {
/// let client = ApiConfig::new("https://api.provider.example", "token").into_client()?;
/// let manager = TagManager::new(&client);
/// let id: DeviceId = "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8".parse().unwrap();
///
/// manager.add_tag(&id, "env=staging").await?;
/// let pairs = manager.kv_pairs(&id, "=").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TagManager<'a, C> {
    api: &'a C,
}

impl<'a, C: DeviceApi> TagManager<'a, C> {
    /// Creates a manager over the given API client.
    #[must_use]
    pub fn new(api: &'a C) -> Self {
        Self { api }
    }

    /// Fetches a device and parses its structured tags.
    ///
    /// An empty `delimiter` defaults to `"="`; see
    /// [`parse_kv_pairs`](crate::tags::parse_kv_pairs).
    ///
    /// # Errors
    ///
    /// Returns [`TagError::Fetch`] if the device cannot be read.
    pub async fn kv_pairs(
        &self,
        device_id: &DeviceId,
        delimiter: &str,
    ) -> Result<Vec<KvPair>, TagError> {
        let device = self.fetch(device_id).await?;
        Ok(parse_kv_pairs(&device.tags, delimiter))
    }

    /// Appends a tag to a device.
    ///
    /// No existence check is made: adding a tag that is already present
    /// creates a duplicate entry. Returns the updated device.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::Fetch`] if the device cannot be read (no update
    /// is attempted), or [`TagError::Update`] if the replacement list
    /// cannot be submitted.
    pub async fn add_tag(&self, device_id: &DeviceId, tag: &str) -> Result<Device, TagError> {
        let device = self.fetch(device_id).await?;
        let tags = edit::appended(&device.tags, tag);

        tracing::debug!(%device_id, tag, "Adding device tag");

        self.submit(device_id, tags).await
    }

    /// Removes every occurrence of a tag from a device.
    ///
    /// If the tag is absent the unchanged list is still submitted. Returns
    /// the updated device.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::Fetch`] if the device cannot be read (no update
    /// is attempted), or [`TagError::Update`] if the replacement list
    /// cannot be submitted.
    pub async fn remove_tag(&self, device_id: &DeviceId, tag: &str) -> Result<Device, TagError> {
        let device = self.fetch(device_id).await?;
        let tags = edit::removed(&device.tags, tag);

        tracing::debug!(%device_id, tag, "Removing device tag");

        self.submit(device_id, tags).await
    }

    /// Replaces every occurrence of `old_tag` with `new_tag` on a device.
    ///
    /// Order is preserved. If `old_tag` is absent nothing changes, but the
    /// unchanged list is still submitted. Returns the updated device.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::Fetch`] if the device cannot be read (no update
    /// is attempted), or [`TagError::Update`] if the replacement list
    /// cannot be submitted.
    pub async fn update_tag(
        &self,
        device_id: &DeviceId,
        old_tag: &str,
        new_tag: &str,
    ) -> Result<Device, TagError> {
        let device = self.fetch(device_id).await?;
        let tags = edit::replaced(&device.tags, old_tag, new_tag);

        tracing::debug!(%device_id, old_tag, new_tag, "Updating device tag");

        self.submit(device_id, tags).await
    }

    async fn fetch(&self, device_id: &DeviceId) -> Result<Device, TagError> {
        self.api
            .get_device(device_id)
            .await
            .map_err(|source| TagError::Fetch {
                device_id: *device_id,
                source,
            })
    }

    async fn submit(&self, device_id: &DeviceId, tags: Vec<String>) -> Result<Device, TagError> {
        let update = DeviceUpdate::new().with_tags(tags);
        self.api
            .update_device(device_id, &update)
            .await
            .map_err(|source| TagError::Update {
                device_id: *device_id,
                source,
            })
    }
}
