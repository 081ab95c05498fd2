// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Arris Exporter
//!
//! Prometheus exporter for Arris cable modems.
//!
//! This library scrapes the modem's embedded status pages, extracts uptime,
//! identity, boot sequence health and RF channel readings, and exposes the
//! last successful snapshot in Prometheus format.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `collector`: scrape cycle and polling loop
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: snapshot projection, store and registry
//! - `modem`: modem page fetching and extraction
//! - `prelude`: commonly used types and traits

mod api;
mod collector;
mod config;
mod error;
mod metrics;
mod modem;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Cli, Config};

/// Application error and result types
pub use error::{AppError, Result, ScrapeError};

/// HTTP API router and state
pub use api::{AppState, create_router, handlers::HealthResponse};

/// Scrape cycle and metrics collection loop
pub use collector::{run_scrape_cycle, scrape, start_collection_loop};

/// Metrics snapshot, store and registry
pub use metrics::{
    BootStatusLabels, DownstreamLabels, InfoLabels, MetricSnapshot, MetricsRegistry,
    SnapshotStore, UpstreamLabels,
};

/// Modem client, page layouts and extracted records
pub use modem::{
    BootStatusEntry, DownstreamChannel, ModemClient, ModemInfo, ModemReport, Page, PageLayout,
    UpstreamChannel,
};

/// Cell text parsers
pub use modem::{UnitError, parse_plain_float, parse_suffixed_float, parse_uptime};
