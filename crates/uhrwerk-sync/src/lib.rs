// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Uhrwerk — Wallet-to-watch sync: encoder, channel adapter, and façade.
//
// Data flow: caller → `WearSync` façade → `encode` → `ChannelAdapter` →
// platform transport → companion device. Nothing flows back; delivery is
// best-effort and a failed sync never disturbs the wallet's primary
// function.

pub mod adapter;
pub mod encoder;
pub mod facade;

pub use adapter::ChannelAdapter;
pub use encoder::encode;
pub use facade::WearSync;
