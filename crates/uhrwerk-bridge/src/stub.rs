// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native mobile APIs are unavailable.
//
// The transport reports `NoActiveDevice` — a desktop build has no bonded
// companion — and the lifecycle handle reports `PlatformUnavailable`. Real
// implementations live in the `ios` and `android` modules.

use uhrwerk_core::error::{Result, SyncError};

use crate::traits::{AppLifecycle, WearableTransport};

/// No-op transport returned on non-mobile platforms.
pub struct StubTransport;

impl WearableTransport for StubTransport {
    async fn send(&self, path: &str, _payload: &[u8]) -> Result<()> {
        tracing::warn!(path, "WearableTransport::send called on stub transport");
        Err(SyncError::NoActiveDevice)
    }
}

/// No-op lifecycle handle returned on non-mobile platforms.
pub struct StubLifecycle;

impl AppLifecycle for StubLifecycle {
    fn kill_app(&self) -> Result<()> {
        tracing::warn!("AppLifecycle::kill_app called on stub lifecycle");
        Err(SyncError::PlatformUnavailable)
    }
}
