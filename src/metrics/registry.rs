// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and exposition encoding

use std::collections::BTreeMap;
use std::sync::Arc;

use prometheus_client::collector::Collector;
use prometheus_client::encoding::text::encode;
use prometheus_client::encoding::{DescriptorEncoder, EncodeLabelSet, EncodeMetric};
use prometheus_client::metrics::MetricType;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::{ConstGauge, Gauge};
use prometheus_client::registry::Registry;

use super::labels::ScrapeErrorLabels;
use super::snapshot::MetricSnapshot;
use super::store::SnapshotStore;
use crate::error::{AppError, Result};

/// Namespace of every exported metric
pub const NAMESPACE: &str = "arris_modem";

/// Exporter metrics plus the store holding the last modem snapshot
///
/// Scrape bookkeeping persists across cycles. Modem metrics are rebuilt from
/// the current snapshot on every encode, so a failed cycle leaves the
/// previous values visible.
#[derive(Clone)]
pub struct MetricsRegistry {
    store: SnapshotStore,
    scrape_success: Counter,
    scrape_errors: Family<ScrapeErrorLabels, Counter>,
    scrape_duration_milliseconds: Gauge,
    scrape_last_success_timestamp_seconds: Gauge,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: SnapshotStore::new(),
            scrape_success: Counter::default(),
            scrape_errors: Family::default(),
            scrape_duration_milliseconds: Gauge::default(),
            scrape_last_success_timestamp_seconds: Gauge::default(),
        }
    }

    /// Replaces the visible modem snapshot
    pub async fn publish(&self, snapshot: MetricSnapshot) {
        self.store.publish(snapshot).await;
    }

    pub async fn snapshot(&self) -> Option<Arc<MetricSnapshot>> {
        self.store.current().await
    }

    pub fn record_scrape_success(&self, duration_secs: f64) {
        self.scrape_success.inc();
        self.record_scrape_duration(duration_secs);
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        #[allow(clippy::cast_possible_wrap)]
        self.scrape_last_success_timestamp_seconds.set(now as i64);
    }

    pub fn record_scrape_error(&self, kind: &str, duration_secs: f64) {
        self.scrape_errors
            .get_or_create(&ScrapeErrorLabels {
                kind: kind.to_string(),
            })
            .inc();
        self.record_scrape_duration(duration_secs);
    }

    fn record_scrape_duration(&self, duration_secs: f64) {
        #[allow(clippy::cast_possible_truncation)]
        let millis = (duration_secs * 1000.0).round() as i64;
        self.scrape_duration_milliseconds.set(millis);
    }

    pub fn scrape_success_count(&self) -> u64 {
        self.scrape_success.get()
    }

    pub fn scrape_error_count(&self, kind: &str) -> u64 {
        self.scrape_errors
            .get_or_create(&ScrapeErrorLabels {
                kind: kind.to_string(),
            })
            .get()
    }

    /// Encodes exporter metrics and the current snapshot in OpenMetrics text
    ///
    /// # Errors
    ///
    /// Returns `AppError::Metrics` if text encoding fails.
    pub async fn encode_metrics(&self) -> Result<String> {
        let mut registry = Registry::with_prefix(NAMESPACE);

        registry.register(
            "scrape_success",
            "Successful scrape cycles",
            self.scrape_success.clone(),
        );
        registry.register(
            "scrape_errors",
            "Failed scrape cycles by error kind",
            self.scrape_errors.clone(),
        );
        registry.register(
            "scrape_duration_milliseconds",
            "Duration of the last scrape cycle",
            self.scrape_duration_milliseconds.clone(),
        );
        registry.register(
            "scrape_last_success_timestamp_seconds",
            "Unix time of the last successful scrape",
            self.scrape_last_success_timestamp_seconds.clone(),
        );

        if let Some(snapshot) = self.store.current().await {
            registry.register_collector(Box::new(SnapshotCollector(snapshot)));
        }

        let mut buffer = String::new();
        encode(&mut buffer, &registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }
}

/// Encodes a published snapshot with series in label order
#[derive(Debug)]
struct SnapshotCollector(Arc<MetricSnapshot>);

impl Collector for SnapshotCollector {
    fn encode(&self, mut encoder: DescriptorEncoder) -> std::result::Result<(), std::fmt::Error> {
        let snapshot = &self.0;

        let uptime = encoder.encode_descriptor(
            "uptime",
            "Time in seconds the modem has been booted",
            None,
            MetricType::Gauge,
        )?;
        ConstGauge::new(snapshot.uptime_seconds).encode(uptime)?;

        encode_gauge_family(
            &mut encoder,
            "info",
            "Hardware and software information about the modem",
            &snapshot.info,
        )?;
        encode_gauge_family(
            &mut encoder,
            "boot_status",
            "Info about the boot sequence",
            &snapshot.boot_status,
        )?;
        encode_gauge_family(
            &mut encoder,
            "downstream_channel_power",
            "Power info in dBmV for a downstream channel",
            &snapshot.downstream_power,
        )?;
        encode_gauge_family(
            &mut encoder,
            "downstream_channel_snr",
            "SNR info in dB for a downstream channel",
            &snapshot.downstream_snr,
        )?;
        encode_gauge_family(
            &mut encoder,
            "downstream_channel_corrected",
            "Packets corrected for a downstream channel",
            &snapshot.downstream_corrected,
        )?;
        encode_gauge_family(
            &mut encoder,
            "downstream_channel_uncorrectable",
            "Packets uncorrectable for a downstream channel",
            &snapshot.downstream_uncorrectable,
        )?;
        encode_gauge_family(
            &mut encoder,
            "upstream_channel_power",
            "Power info in dBmV for an upstream channel",
            &snapshot.upstream_power,
        )
    }
}

fn encode_gauge_family<L: EncodeLabelSet>(
    encoder: &mut DescriptorEncoder,
    name: &str,
    help: &str,
    samples: &BTreeMap<L, f64>,
) -> std::result::Result<(), std::fmt::Error> {
    // empty families are omitted, as the registry does for its own metrics
    if samples.is_empty() {
        return Ok(());
    }
    let mut family = encoder.encode_descriptor(name, help, None, MetricType::Gauge)?;
    for (labels, value) in samples {
        ConstGauge::new(*value).encode(family.encode_family(labels)?)?;
    }
    Ok(())
}
