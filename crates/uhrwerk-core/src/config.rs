// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sync channel configuration.

use serde::{Deserialize, Serialize};

/// Logical paths on the phone-to-watch channel.
///
/// Full receive-data messages (address + URI prefix) and legacy
/// address-only messages travel on distinct paths so older companion
/// builds that only understand the narrower shape keep working.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Path for full receive-data messages.
    pub wallet_data_path: String,
    /// Path for legacy address-only messages.
    pub wallet_address_path: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            wallet_data_path: "/wallet_data".into(),
            wallet_address_path: "/wallet_address".into(),
        }
    }
}
