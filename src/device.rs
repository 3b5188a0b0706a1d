// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Provider device resource models.
//!
//! These types mirror the subset of the provider's device representation
//! that tag management needs. The full API resource carries many more
//! fields; unknown fields are ignored on decode.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a provider device.
///
/// Device IDs are UUIDs assigned by the provider. This wrapper provides a
/// distinct type for device identification, preventing accidental confusion
/// with other UUID-based identifiers.
///
/// # Examples
///
/// ```
/// use metaltags::DeviceId;
///
/// let id: DeviceId = "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8".parse().unwrap();
/// assert_eq!(id.to_string(), "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(Uuid);

impl DeviceId {
    /// Creates a device identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show only first 8 characters for readability
        let short = &self.0.to_string()[..8];
        write!(f, "DeviceId({short}...)")
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DeviceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for DeviceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<DeviceId> for Uuid {
    fn from(id: DeviceId) -> Self {
        id.0
    }
}

/// A provider device as returned by the API.
///
/// Holds the ordered tag list plus the identifying fields useful for
/// logging. The library never owns a device; this is a snapshot taken by a
/// single read call.
///
/// # Examples
///
/// ```
/// use metaltags::Device;
///
/// let json = r#"{
///     "id": "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8",
///     "hostname": "worker-01",
///     "state": "active",
///     "tags": ["env=prod", "rack-7"]
/// }"#;
/// let device: Device = serde_json::from_str(json).unwrap();
/// assert_eq!(device.tags, vec!["env=prod", "rack-7"]);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    /// Provider-assigned device ID.
    pub id: DeviceId,

    /// Device hostname.
    #[serde(default)]
    pub hostname: String,

    /// Provisioning state reported by the provider (e.g. `"active"`).
    #[serde(default)]
    pub state: String,

    /// Ordered tag list. Order is meaningful and preserved by every
    /// operation in this library.
    #[serde(default)]
    pub tags: Vec<String>,

    /// When the device was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the device was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of a device update request.
///
/// All fields are optional; `None` fields are omitted from the request body
/// and left untouched by the provider. Tag updates always submit the full
/// replacement list.
///
/// # Examples
///
/// ```
/// use metaltags::DeviceUpdate;
///
/// let update = DeviceUpdate::new().with_tags(vec!["env=prod".to_string()]);
/// let body = serde_json::to_string(&update).unwrap();
/// assert_eq!(body, r#"{"tags":["env=prod"]}"#);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeviceUpdate {
    /// New hostname, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// New description, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Full replacement tag list, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl DeviceUpdate {
    /// Creates an empty update (no fields changed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hostname.
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the full replacement tag list.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_id_round_trip() {
        let uuid = Uuid::new_v4();
        let id = DeviceId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
        assert_eq!(id.to_string().parse::<DeviceId>().unwrap(), id);
    }

    #[test]
    fn device_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<DeviceId>().is_err());
    }

    #[test]
    fn device_id_debug_format() {
        let id: DeviceId = "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8".parse().unwrap();
        assert_eq!(format!("{id:?}"), "DeviceId(a1a2a3a4...)");
    }

    #[test]
    fn decode_device_ignores_unknown_fields() {
        let json = r#"{
            "id": "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8",
            "hostname": "db-3",
            "state": "active",
            "tags": ["a=b"],
            "plan": {"slug": "c3.small.x86"},
            "created_at": "2024-05-01T10:30:00Z"
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.hostname, "db-3");
        assert_eq!(device.tags, vec!["a=b"]);
        assert!(device.created_at.is_some());
        assert!(device.updated_at.is_none());
    }

    #[test]
    fn decode_device_without_tags() {
        let json = r#"{"id": "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8"}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert!(device.tags.is_empty());
        assert!(device.hostname.is_empty());
    }

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let body = serde_json::to_string(&DeviceUpdate::new()).unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn update_with_tags_only_carries_tags() {
        let update = DeviceUpdate::new().with_tags(vec!["a=b".to_string(), "x".to_string()]);
        let body = serde_json::to_string(&update).unwrap();
        assert_eq!(body, r#"{"tags":["a=b","x"]}"#);
    }

    #[test]
    fn update_builder_chain() {
        let update = DeviceUpdate::new()
            .with_hostname("edge-1")
            .with_description("edge node")
            .with_tags(vec![]);
        assert_eq!(update.hostname.as_deref(), Some("edge-1"));
        assert_eq!(update.description.as_deref(), Some("edge node"));
        assert_eq!(update.tags, Some(vec![]));
    }
}
