// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Channel transport adapter.
//
// One-shot acquire → send → release per invocation, no internal state
// machine. Device resolution and channel handling live inside the
// platform transport; this adapter only picks the logical path and hands
// the payload over.

use tracing::debug;
use uhrwerk_bridge::traits::WearableTransport;
use uhrwerk_core::config::SyncConfig;
use uhrwerk_core::error::Result;
use uhrwerk_core::types::SyncRequest;

/// Binds a wearable transport to the configured channel paths.
pub struct ChannelAdapter<T> {
    transport: T,
    config: SyncConfig,
}

impl<T: WearableTransport> ChannelAdapter<T> {
    pub fn new(transport: T, config: SyncConfig) -> Self {
        Self { transport, config }
    }

    /// Logical path for a request.
    ///
    /// Requests without a URI prefix travel on the legacy address-only
    /// path so older companion builds keep understanding them; full
    /// receive-data requests get their own path.
    pub fn channel_path(&self, request: &SyncRequest) -> &str {
        if request.uri_prefix().is_some() {
            &self.config.wallet_data_path
        } else {
            &self.config.wallet_address_path
        }
    }

    /// Submit an encoded payload for the given request.
    ///
    /// Resolves once the platform has accepted the submission locally;
    /// remote receipt is never awaited. No retry on failure.
    pub async fn transmit(&self, request: &SyncRequest, payload: &[u8]) -> Result<()> {
        let path = self.channel_path(request);
        debug!(path, bytes = payload.len(), "submitting sync payload");
        self.transport.send(path, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullTransport;

    impl WearableTransport for NullTransport {
        async fn send(&self, _path: &str, _payload: &[u8]) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn path_follows_message_shape() {
        let adapter = ChannelAdapter::new(NullTransport, SyncConfig::default());
        let full = SyncRequest::new("qAddr123", "ecash:").unwrap();
        let legacy = SyncRequest::new("qAddr123", "").unwrap();
        assert_eq!(adapter.channel_path(&full), "/wallet_data");
        assert_eq!(adapter.channel_path(&legacy), "/wallet_address");
    }
}
