// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics module for Arris Exporter
//!
//! Contains label types, the snapshot projection, the snapshot store and the
//! Prometheus registry used for exposition.

mod labels;
mod registry;
mod snapshot;
mod store;

/// Label sets of the exported metric families
pub use labels::{BootStatusLabels, DownstreamLabels, InfoLabels, UpstreamLabels};

/// Prometheus metrics registry
pub use registry::MetricsRegistry;

/// Snapshot of modem metrics and its store
pub use snapshot::MetricSnapshot;
pub use store::SnapshotStore;
