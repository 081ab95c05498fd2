// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Projection of extracted modem records onto the metric schema

use std::collections::BTreeMap;

use crate::metrics::labels::{BootStatusLabels, DownstreamLabels, InfoLabels, UpstreamLabels};
use crate::modem::{DownstreamChannel, ModemReport, UpstreamChannel};

/// Immutable set of gauge values produced by one scrape cycle
///
/// Each field is one metric family keyed by label set. A repeated label set
/// keeps the last value written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSnapshot {
    /// `arris_modem_uptime`
    pub uptime_seconds: f64,
    /// `arris_modem_info`
    pub info: BTreeMap<InfoLabels, f64>,
    /// `arris_modem_boot_status`
    pub boot_status: BTreeMap<BootStatusLabels, f64>,
    /// `arris_modem_downstream_channel_power`
    pub downstream_power: BTreeMap<DownstreamLabels, f64>,
    /// `arris_modem_downstream_channel_snr`
    pub downstream_snr: BTreeMap<DownstreamLabels, f64>,
    /// `arris_modem_downstream_channel_corrected`
    pub downstream_corrected: BTreeMap<DownstreamLabels, f64>,
    /// `arris_modem_downstream_channel_uncorrectable`
    pub downstream_uncorrectable: BTreeMap<DownstreamLabels, f64>,
    /// `arris_modem_upstream_channel_power`
    pub upstream_power: BTreeMap<UpstreamLabels, f64>,
}

impl MetricSnapshot {
    /// Maps the records of one scrape onto the metric schema
    #[must_use]
    pub fn project(report: &ModemReport) -> Self {
        let mut snapshot = Self {
            uptime_seconds: report.info.uptime.as_secs_f64(),
            ..Self::default()
        };

        snapshot.info.insert(
            InfoLabels {
                model: report.info.model.clone(),
                hardware_version: report.info.hardware_version.clone(),
                software_version: report.info.software_version.clone(),
            },
            1.0,
        );

        for entry in &report.boot_status {
            snapshot.boot_status.insert(
                BootStatusLabels {
                    r#type: entry.label.clone(),
                },
                if entry.healthy { 1.0 } else { 0.0 },
            );
        }

        for channel in &report.downstream {
            let labels = downstream_labels(channel);
            snapshot
                .downstream_power
                .insert(labels.clone(), channel.power);
            snapshot.downstream_snr.insert(labels.clone(), channel.snr);
            snapshot
                .downstream_corrected
                .insert(labels.clone(), channel.corrected);
            snapshot
                .downstream_uncorrectable
                .insert(labels, channel.uncorrectable);
        }

        for channel in &report.upstream {
            snapshot
                .upstream_power
                .insert(upstream_labels(channel), channel.power);
        }

        snapshot
    }

    /// Number of downstream channels in the snapshot
    #[must_use]
    pub fn downstream_channels(&self) -> usize {
        self.downstream_power.len()
    }

    /// Number of upstream channels in the snapshot
    #[must_use]
    pub fn upstream_channels(&self) -> usize {
        self.upstream_power.len()
    }
}

fn downstream_labels(channel: &DownstreamChannel) -> DownstreamLabels {
    DownstreamLabels {
        channel: channel.channel.clone(),
        status: channel.status.clone(),
        modulation: channel.modulation.clone(),
        channel_id: channel.channel_id.clone(),
        frequency: channel.frequency.clone(),
    }
}

fn upstream_labels(channel: &UpstreamChannel) -> UpstreamLabels {
    UpstreamLabels {
        channel: channel.channel.clone(),
        status: channel.status.clone(),
        r#type: channel.channel_type.clone(),
        channel_id: channel.channel_id.clone(),
        symbol_rate: channel.symbol_rate.clone(),
        frequency: channel.frequency.clone(),
    }
}
