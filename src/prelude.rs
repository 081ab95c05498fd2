// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use arris_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::{Cli, Config};
pub use crate::error::{AppError, Result, ScrapeError};

// Metrics types
pub use crate::metrics::{
    BootStatusLabels, DownstreamLabels, InfoLabels, MetricSnapshot, MetricsRegistry,
    SnapshotStore, UpstreamLabels,
};

// Modem client
pub use crate::modem::{
    BootStatusEntry, CompiledLayout, DownstreamChannel, ModemClient, ModemInfo, ModemReport,
    Page, PageLayout, UpstreamChannel, extract_boot_status, extract_downstream, extract_info,
    extract_upstream,
};
