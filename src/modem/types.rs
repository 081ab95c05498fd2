// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Type definitions for records extracted from the modem web interface

use std::fmt;
use std::time::Duration;

/// Status page of the modem web interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Software/hardware information and uptime
    Info,
    /// Boot sequence and RF channel tables
    Status,
}

impl Page {
    /// Request path of the page on the modem
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Info => "/RgSwInfo.asp",
            Self::Status => "/RgConnect.asp",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Identity and uptime of the modem
#[derive(Debug, Clone, PartialEq)]
pub struct ModemInfo {
    pub model: String,
    pub hardware_version: String,
    pub software_version: String,
    pub uptime: Duration,
}

/// One recognized row of the startup procedure table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootStatusEntry {
    /// Row title, lower-cased with spaces replaced by underscores
    pub label: String,
    pub healthy: bool,
}

/// Downstream bonded channel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownstreamChannel {
    pub channel: String,
    pub status: String,
    pub modulation: String,
    pub channel_id: String,
    pub frequency: String,
    /// dBmV
    pub power: f64,
    /// dB
    pub snr: f64,
    pub corrected: f64,
    pub uncorrectable: f64,
}

/// Upstream bonded channel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpstreamChannel {
    pub channel: String,
    pub status: String,
    pub channel_type: String,
    pub channel_id: String,
    pub symbol_rate: String,
    pub frequency: String,
    /// dBmV
    pub power: f64,
}

/// Everything extracted during one scrape cycle
#[derive(Debug, Clone, PartialEq)]
pub struct ModemReport {
    pub info: ModemInfo,
    pub boot_status: Vec<BootStatusEntry>,
    pub downstream: Vec<DownstreamChannel>,
    pub upstream: Vec<UpstreamChannel>,
}
