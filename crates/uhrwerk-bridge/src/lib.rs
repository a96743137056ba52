// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Uhrwerk — Native platform transport abstractions.
//
// This crate defines the transport and lifecycle traits plus the platform
// dispatch logic for the native bridge. High-level sync code talks to the
// paired watch through a unified interface; the concrete implementation is
// WatchConnectivity on iOS, the Wearable Data Layer on Android, and a
// warn-and-fail stub everywhere else.

pub mod traits;

#[cfg(target_os = "ios")]
pub mod ios;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod stub;

/// Concrete transport type for the target operating system.
///
/// A type alias rather than a boxed trait object: `WearableTransport::send`
/// returns an opaque future, which rules out `dyn` dispatch.
#[cfg(target_os = "ios")]
pub type PlatformTransport = ios::WatchSessionTransport;
#[cfg(target_os = "android")]
pub type PlatformTransport = android::DataLayerTransport;
#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub type PlatformTransport = stub::StubTransport;

/// Concrete lifecycle type for the target operating system.
#[cfg(target_os = "ios")]
pub type PlatformLifecycle = ios::IosLifecycle;
#[cfg(target_os = "android")]
pub type PlatformLifecycle = android::AndroidLifecycle;
#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub type PlatformLifecycle = stub::StubLifecycle;

/// Build the wearable transport for the target operating system.
pub fn platform_transport() -> PlatformTransport {
    #[cfg(target_os = "ios")]
    {
        // iOS: WatchConnectivity application context via objc2.
        ios::WatchSessionTransport::new()
    }
    #[cfg(target_os = "android")]
    {
        // Android: Wearable Data Layer MessageClient via jni-rs.
        android::DataLayerTransport::new()
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        // DESKTOP/CI: no companion device exists; every send fails fast.
        stub::StubTransport
    }
}

/// Build the host lifecycle handle for the target operating system.
pub fn platform_lifecycle() -> PlatformLifecycle {
    #[cfg(target_os = "ios")]
    {
        ios::IosLifecycle
    }
    #[cfg(target_os = "android")]
    {
        android::AndroidLifecycle
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        stub::StubLifecycle
    }
}
