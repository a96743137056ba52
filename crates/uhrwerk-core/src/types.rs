// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Uhrwerk watch-sync bridge.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

/// Wire discriminator for receive-data sync messages.
///
/// Distinguishes the full shape from the legacy address-only variant
/// consumed by older companion builds.
pub const MESSAGE_TYPE: &str = "wallet_receive_sync";

/// A single sync invocation's input: the wallet receive address plus an
/// optional payment-URI prefix (e.g. `"ecash:"`).
///
/// Immutable once constructed. The address is guaranteed non-empty; an
/// empty prefix is normalized to `None` at construction so the wire
/// encoding can omit the key entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    address: String,
    uri_prefix: Option<String>,
}

impl SyncRequest {
    /// Validate and build a request.
    ///
    /// Fails with `InvalidInput` when the address is empty. The prefix is
    /// an opaque string; by convention a non-empty prefix ends with the
    /// wallet URI scheme's separator, but that is the caller's business.
    pub fn new(address: impl Into<String>, uri_prefix: impl Into<String>) -> Result<Self> {
        let address = address.into();
        if address.is_empty() {
            return Err(SyncError::InvalidInput("address must not be empty".into()));
        }
        let uri_prefix = uri_prefix.into();
        Ok(Self {
            address,
            uri_prefix: (!uri_prefix.is_empty()).then_some(uri_prefix),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn uri_prefix(&self) -> Option<&str> {
        self.uri_prefix.as_deref()
    }
}

/// Canonical wire payload delivered to the companion device.
///
/// Field order is fixed by declaration order, which keeps the JSON
/// encoding byte-deterministic for equal inputs. The `uriPrefix` key is
/// absent (not null, not empty) when the request carried no prefix —
/// companion consumers of the legacy address-only shape rely on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    #[serde(rename = "uriPrefix", skip_serializing_if = "Option::is_none")]
    pub uri_prefix: Option<String>,
}

impl SyncMessage {
    /// Derive the wire message from a validated request.
    pub fn from_request(request: &SyncRequest) -> Self {
        Self {
            kind: MESSAGE_TYPE.to_owned(),
            address: request.address().to_owned(),
            uri_prefix: request.uri_prefix().map(str::to_owned),
        }
    }
}
