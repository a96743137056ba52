// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.

use std::future::Future;

use uhrwerk_core::error::Result;

/// One-shot message submission to the paired companion device.
///
/// Implementations resolve the companion device fresh on every call
/// (acquire, send, release — no handle is cached across calls, which keeps
/// stale-session failures out of the picture) and must fail fast with
/// `SyncError::NoActiveDevice` when no device is reachable. Submission
/// failures are reported as `SyncError::TransportFailure`.
///
/// `send` resolves once the payload has been handed to the platform's
/// messaging layer, not when the remote end receives it. Delivery is
/// best-effort: no retries, no queuing, no ordering across calls.
pub trait WearableTransport: Send + Sync {
    /// Submit an encoded payload on the given logical path.
    fn send(&self, path: &str, payload: &[u8]) -> impl Future<Output = Result<()>> + Send;
}

/// Host application lifecycle control.
pub trait AppLifecycle {
    /// Finish every activity in the application task.
    ///
    /// No-op when no foreground activity exists. Used to properly terminate
    /// the app when the user cancels authentication — without it the app
    /// lingers in the background and can resume in an inconsistent state.
    fn kill_app(&self) -> Result<()>;
}
