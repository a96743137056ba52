// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sync façade — the public entry point for wallet-to-watch sync.
//
// Validates inputs, encodes, and hands the payload to the channel
// adapter. Holds no cross-call mutable state, so it is safe to call
// concurrently from any number of tasks without coordination. No
// ordering is guaranteed across calls and nothing is deduplicated:
// two quick syncs may arrive at the watch in either order.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use uhrwerk_bridge::traits::WearableTransport;
use uhrwerk_bridge::{PlatformTransport, platform_transport};
use uhrwerk_core::config::SyncConfig;
use uhrwerk_core::error::Result;
use uhrwerk_core::types::SyncRequest;

use crate::adapter::ChannelAdapter;
use crate::encoder::encode;

/// Best-effort wallet-to-watch sync over an injected transport.
///
/// Cheap to clone; clones share the transport.
pub struct WearSync<T> {
    adapter: Arc<ChannelAdapter<T>>,
}

impl<T> Clone for WearSync<T> {
    fn clone(&self) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
        }
    }
}

impl WearSync<PlatformTransport> {
    /// Façade over the native transport for the target operating system.
    pub fn platform() -> Self {
        Self::new(platform_transport())
    }
}

impl<T: WearableTransport> WearSync<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SyncConfig::default())
    }

    pub fn with_config(transport: T, config: SyncConfig) -> Self {
        Self {
            adapter: Arc::new(ChannelAdapter::new(transport, config)),
        }
    }

    /// Push the receive address to the paired watch.
    ///
    /// Equivalent to [`sync_data`](Self::sync_data) with an empty prefix.
    pub async fn sync_address(&self, address: &str) -> Result<()> {
        self.sync_data(address, "").await
    }

    /// Push the receive address and payment-URI prefix to the paired watch.
    ///
    /// Resolves once the payload has been handed to the platform's
    /// messaging layer — never when (or whether) the watch receives it.
    /// An empty address fails with `InvalidInput` before the transport is
    /// touched. Transport failures come back as typed errors, never as
    /// panics: the wallet keeps receiving funds whether or not the watch
    /// hears about it.
    pub async fn sync_data(&self, address: &str, uri_prefix: &str) -> Result<()> {
        let request = SyncRequest::new(address, uri_prefix)?;
        let payload = encode(&request)?;
        match self.adapter.transmit(&request, &payload).await {
            Ok(()) => {
                debug!(address, "wallet data synced to watch");
                Ok(())
            }
            Err(e) => {
                warn!(address, error = %e, "wallet sync failed");
                Err(e)
            }
        }
    }
}

impl<T: WearableTransport + 'static> WearSync<T> {
    /// Fire-and-forget form of [`sync_data`](Self::sync_data).
    ///
    /// Spawns the send and returns immediately; failures are logged and
    /// otherwise swallowed. The handle may be dropped — once submitted a
    /// sync cannot be cancelled anyway.
    pub fn sync_data_detached(
        &self,
        address: impl Into<String>,
        uri_prefix: impl Into<String>,
    ) -> JoinHandle<()> {
        let sync = self.clone();
        let address = address.into();
        let uri_prefix = uri_prefix.into();
        tokio::spawn(async move {
            // sync_data already logs the failure; nothing more to do here.
            let _ = sync.sync_data(&address, &uri_prefix).await;
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use uhrwerk_core::error::SyncError;
    use uhrwerk_core::types::SyncMessage;

    use super::*;

    /// Test double: records every submission, optionally failing calls
    /// with scripted errors first.
    #[derive(Clone, Default)]
    struct RecordingTransport {
        calls: Arc<AtomicUsize>,
        sent: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
        failures: Arc<Mutex<VecDeque<SyncError>>>,
    }

    impl RecordingTransport {
        fn fail_next(&self, err: SyncError) {
            self.failures.lock().unwrap().push_back(err);
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn sent(&self) -> Vec<(String, Vec<u8>)> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl WearableTransport for RecordingTransport {
        async fn send(&self, path: &str, payload: &[u8]) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.failures.lock().unwrap().pop_front() {
                return Err(err);
            }
            self.sent
                .lock()
                .unwrap()
                .push((path.to_owned(), payload.to_vec()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn empty_address_never_reaches_transport() {
        let transport = RecordingTransport::default();
        let sync = WearSync::new(transport.clone());

        assert!(matches!(
            sync.sync_address("").await,
            Err(SyncError::InvalidInput(_))
        ));
        assert!(matches!(
            sync.sync_data("", "ecash:").await,
            Err(SyncError::InvalidInput(_))
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn absent_device_surfaces_as_typed_error() {
        let transport = RecordingTransport::default();
        transport.fail_next(SyncError::NoActiveDevice);
        let sync = WearSync::new(transport.clone());

        assert!(matches!(
            sync.sync_data("qAddr123", "").await,
            Err(SyncError::NoActiveDevice)
        ));
    }

    #[tokio::test]
    async fn stub_transport_reports_no_active_device() {
        let sync = WearSync::new(uhrwerk_bridge::stub::StubTransport);
        assert!(matches!(
            sync.sync_data("qAddr123", "").await,
            Err(SyncError::NoActiveDevice)
        ));
    }

    #[tokio::test]
    async fn failure_does_not_poison_later_calls() {
        let transport = RecordingTransport::default();
        transport.fail_next(SyncError::TransportFailure("channel closed".into()));
        let sync = WearSync::new(transport.clone());

        assert!(matches!(
            sync.sync_data("qAddr123", "ecash:").await,
            Err(SyncError::TransportFailure(_))
        ));
        sync.sync_data("qAddr123", "ecash:").await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "/wallet_data");
    }

    #[tokio::test]
    async fn address_only_sync_uses_legacy_path() {
        let transport = RecordingTransport::default();
        let sync = WearSync::new(transport.clone());

        sync.sync_address("qAddr123").await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "/wallet_address");
        let message: SyncMessage = serde_json::from_slice(&sent[0].1).unwrap();
        assert_eq!(message.address, "qAddr123");
        assert_eq!(message.uri_prefix, None);
    }

    #[tokio::test]
    async fn detached_sync_submits_in_background() {
        let transport = RecordingTransport::default();
        let sync = WearSync::new(transport.clone());

        let handle = sync.sync_data_detached("qAddr123", "ecash:");
        handle.await.unwrap();

        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn detached_sync_swallows_failures() {
        let transport = RecordingTransport::default();
        transport.fail_next(SyncError::TransportFailure("channel closed".into()));
        let sync = WearSync::new(transport.clone());

        // Must complete without panicking the task.
        sync.sync_data_detached("qAddr123", "").await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_syncs_do_not_cross_deliver() {
        let transport = RecordingTransport::default();
        let sync = WearSync::new(transport.clone());

        let mut handles = Vec::new();
        for i in 0..16 {
            let sync = sync.clone();
            handles.push(tokio::spawn(async move {
                sync.sync_data(&format!("qAddr{i}"), "ecash:").await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let sent = transport.sent();
        assert_eq!(sent.len(), 16);
        for i in 0..16 {
            let address = format!("qAddr{i}");
            let matching: Vec<_> = sent
                .iter()
                .filter(|(_, payload)| {
                    let message: SyncMessage = serde_json::from_slice(payload).unwrap();
                    message.address == address
                })
                .collect();
            assert_eq!(matching.len(), 1, "address {address} delivered once");
            let expected =
                encode(&SyncRequest::new(address.as_str(), "ecash:").unwrap()).unwrap();
            assert_eq!(matching[0].1, expected);
        }
    }
}
