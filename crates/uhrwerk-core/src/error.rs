// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Uhrwerk.
//
// Every variant is recoverable by design: the wallet's primary function
// must continue unaffected when a watch sync fails, so transport faults
// are converted into these typed errors at the façade boundary and never
// allowed to abort the host application.

use thiserror::Error;

/// Top-level error type for all Uhrwerk operations.
#[derive(Debug, Error)]
pub enum SyncError {
    // -- Caller errors --
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // -- Companion device errors --
    #[error("no companion device reachable")]
    NoActiveDevice,

    #[error("wearable transport failed: {0}")]
    TransportFailure(String),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Ambient --
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SyncError>;
