// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Provider API access.
//!
//! This module provides the [`DeviceApi`] trait describing the two device
//! calls tag management needs, and [`ApiClient`], the HTTP implementation
//! backed by the provider's REST API.
//!
//! Operations in [`tags`](crate::tags) are generic over [`DeviceApi`], so
//! tests can substitute an in-memory double for the real client.

mod http;

pub use http::{ApiClient, ApiConfig};

use crate::device::{Device, DeviceId, DeviceUpdate};
use crate::error::ClientError;

/// The device directory calls used by tag operations.
///
/// Implementations read a device snapshot and submit full-field updates.
/// The library treats both as opaque single calls: no retries, no caching.
#[allow(async_fn_in_trait)]
pub trait DeviceApi {
    /// Fetches the current representation of a device.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the call fails or the response cannot be
    /// decoded.
    async fn get_device(&self, id: &DeviceId) -> Result<Device, ClientError>;

    /// Submits an update to a device and returns its new representation.
    ///
    /// Fields left as `None` in the update are not modified.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the call fails or the response cannot be
    /// decoded.
    async fn update_device(
        &self,
        id: &DeviceId,
        update: &DeviceUpdate,
    ) -> Result<Device, ClientError>;
}
