// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `metaltags` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: API communication, response decoding, and tag operations.

use thiserror::Error;

use crate::device::DeviceId;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when reading or
/// mutating device tags through the provider API.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while talking to the provider API.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// Error occurred during a tag operation.
    #[error("tag error: {0}")]
    Tag(#[from] TagError),
}

/// Errors from a single call to the provider API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API token was rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// No device exists with the requested ID.
    #[error("device {0} not found")]
    NotFound(DeviceId),

    /// The provider returned an error response.
    #[error("API error (HTTP {status}): {}", .messages.join("; "))]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Error messages extracted from the response body.
        messages: Vec<String>,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors from a read-modify-write tag operation.
///
/// Distinguishes the two API calls of an operation: a failed read aborts
/// before any update is attempted, while a failed update means the
/// replacement tag list was computed but not persisted.
#[derive(Debug, Error)]
pub enum TagError {
    /// Fetching the device failed; the update was not attempted.
    #[error("failed to fetch device {device_id}: {source}")]
    Fetch {
        /// The device the operation targeted.
        device_id: DeviceId,
        /// The underlying API failure.
        #[source]
        source: ClientError,
    },

    /// Submitting the replacement tag list failed.
    #[error("failed to update tags on device {device_id}: {source}")]
    Update {
        /// The device the operation targeted.
        device_id: DeviceId,
        /// The underlying API failure.
        #[source]
        source: ClientError,
    },
}

impl TagError {
    /// Returns the ID of the device the failed operation targeted.
    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        match self {
            Self::Fetch { device_id, .. } | Self::Update { device_id, .. } => device_id,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
