// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iOS platform bridge via objc2 and WatchConnectivity.
//
// Requires compilation with the iOS SDK (Xcode). Payloads travel through
// `WCSession.updateApplicationContext`, which persists the latest context
// on the phone side and delivers it opportunistically — the watch receives
// it even if it is not reachable at submission time. That matches the
// best-effort contract: local submission is confirmed, remote receipt is
// not.
//
// This module is cfg-gated to `target_os = "ios"` and will not compile on
// other platforms.

#![cfg(target_os = "ios")]

use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2_foundation::{NSData, NSDictionary, NSString};
use objc2_watch_connectivity::{WCSession, WCSessionActivationState};
use tracing::debug;

use uhrwerk_core::error::{Result, SyncError};

use crate::traits::{AppLifecycle, WearableTransport};

/// Application-context key carrying the logical channel path.
const KEY_PATH: &str = "path";
/// Application-context key carrying the encoded payload bytes.
const KEY_PAYLOAD: &str = "payload";

/// Transport over the WatchConnectivity default session.
///
/// The session singleton is resolved fresh on every send; no state is
/// cached between calls.
pub struct WatchSessionTransport;

impl WatchSessionTransport {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the default session if a paired, installed, activated watch
    /// app is reachable through it.
    fn active_session() -> Result<Retained<WCSession>> {
        if !WCSession::isSupported() {
            return Err(SyncError::NoActiveDevice);
        }
        let session = unsafe { WCSession::defaultSession() };
        let activated =
            unsafe { session.activationState() } == WCSessionActivationState::Activated;
        if !activated || !unsafe { session.isPaired() } || !unsafe { session.isWatchAppInstalled() }
        {
            return Err(SyncError::NoActiveDevice);
        }
        Ok(session)
    }

    fn submit(session: &WCSession, path: &str, payload: &[u8]) -> Result<()> {
        let keys = [NSString::from_str(KEY_PATH), NSString::from_str(KEY_PAYLOAD)];
        let objects: [Retained<AnyObject>; 2] = [
            Retained::into_super(Retained::into_super(NSString::from_str(path))),
            Retained::into_super(Retained::into_super(NSData::with_bytes(payload))),
        ];
        let context: Retained<NSDictionary<NSString, AnyObject>> =
            NSDictionary::from_retained_objects(
                &[&*keys[0], &*keys[1]],
                &objects,
            );

        unsafe { session.updateApplicationContext_error(&context) }.map_err(|e| {
            SyncError::TransportFailure(format!(
                "updateApplicationContext: {}",
                e.localizedDescription()
            ))
        })?;
        debug!(path, bytes = payload.len(), "application context updated");
        Ok(())
    }
}

impl Default for WatchSessionTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl WearableTransport for WatchSessionTransport {
    async fn send(&self, path: &str, payload: &[u8]) -> Result<()> {
        // updateApplicationContext queues locally and returns; no blocking
        // worker needed.
        let session = Self::active_session()?;
        Self::submit(&session, path, payload)
    }
}

/// iOS offers no sanctioned programmatic exit — `exit(0)` is an App Store
/// rejection. The capability only ships on Android.
pub struct IosLifecycle;

impl AppLifecycle for IosLifecycle {
    fn kill_app(&self) -> Result<()> {
        Err(SyncError::PlatformUnavailable)
    }
}
