// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canonical wire encoding for sync requests.
//
// Pure and deterministic: no I/O, no clock, no randomness. The original
// iOS module stuffed a timestamp into the context to force updates; that
// was dropped here so equal requests always encode to byte-identical
// payloads and the encoder can be tested without a live transport.

use uhrwerk_core::error::Result;
use uhrwerk_core::types::{SyncMessage, SyncRequest};

/// Build the canonical payload for a request.
///
/// JSON with fields in declaration order: `type`, `address`, and —
/// only when the request carries one — `uriPrefix`.
pub fn encode(request: &SyncRequest) -> Result<Vec<u8>> {
    let message = SyncMessage::from_request(request);
    Ok(serde_json::to_vec(&message)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_is_deterministic() {
        let a = SyncRequest::new("qAddr123", "ecash:").unwrap();
        let b = SyncRequest::new("qAddr123", "ecash:").unwrap();
        assert_eq!(encode(&a).unwrap(), encode(&b).unwrap());
    }

    #[test]
    fn empty_prefix_omits_key() {
        let req = SyncRequest::new("qAddr123", "").unwrap();
        let bytes = encode(&req).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.get("uriPrefix").is_none());
        assert_eq!(value["address"], "qAddr123");
        assert_eq!(value["type"], "wallet_receive_sync");
    }

    #[test]
    fn prefix_included_verbatim() {
        let req = SyncRequest::new("qAddr123", "ecash:").unwrap();
        let bytes = encode(&req).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["uriPrefix"], "ecash:");
    }

    #[test]
    fn payload_round_trips_as_message() {
        let req = SyncRequest::new("qAddr123", "ecash:").unwrap();
        let bytes = encode(&req).unwrap();
        let message: SyncMessage = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(message, SyncMessage::from_request(&req));
    }
}
