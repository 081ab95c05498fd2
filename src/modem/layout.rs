// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Firmware page layouts
//!
//! The modem pages carry almost no semantic markup, so fields are located by
//! structural position (nth table, row, cell). Each supported firmware gets a
//! [`PageLayout`] table; supporting a new one means adding a table, not code.

use scraper::Selector;

use super::types::{DownstreamChannel, UpstreamChannel};
use crate::error::{AppError, Result};

/// Startup procedure row titles and the text each shows when healthy
pub const BOOT_STATUS_EXPECTED: &[(&str, &str)] = &[
    ("Acquire Downstream Channel", "\u{a0}"),
    ("Connectivity State", "OK"),
    ("Boot State", "OK"),
    ("Configuration File", "OK"),
    ("DOCSIS Network Access Enabled", "Allowed"),
    ("Security", "Enabled"),
];

/// Healthy value for a recognized startup procedure title
#[must_use]
pub fn expected_boot_value(title: &str) -> Option<&'static str> {
    BOOT_STATUS_EXPECTED
        .iter()
        .find(|(known, _)| *known == title)
        .map(|(_, expected)| *expected)
}

/// Where a value lands in a channel record
pub enum Slot<'a> {
    /// Opaque text, used as a metric label
    Label(&'a mut String),
    /// Numeric reading
    Value(&'a mut f64),
}

/// A column of a channel table
pub trait ChannelField: Copy + PartialEq + 'static {
    type Record: Default;

    /// Column holding the channel number, used in error context
    const CHANNEL: Self;

    fn name(self) -> &'static str;

    fn slot(self, record: &mut Self::Record) -> Slot<'_>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownstreamField {
    Channel,
    Status,
    Modulation,
    ChannelId,
    Frequency,
    Power,
    Snr,
    Corrected,
    Uncorrectable,
}

impl ChannelField for DownstreamField {
    type Record = DownstreamChannel;

    const CHANNEL: Self = Self::Channel;

    fn name(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Status => "status",
            Self::Modulation => "modulation",
            Self::ChannelId => "channel_id",
            Self::Frequency => "frequency",
            Self::Power => "power",
            Self::Snr => "snr",
            Self::Corrected => "corrected",
            Self::Uncorrectable => "uncorrectable",
        }
    }

    fn slot(self, record: &mut DownstreamChannel) -> Slot<'_> {
        match self {
            Self::Channel => Slot::Label(&mut record.channel),
            Self::Status => Slot::Label(&mut record.status),
            Self::Modulation => Slot::Label(&mut record.modulation),
            Self::ChannelId => Slot::Label(&mut record.channel_id),
            Self::Frequency => Slot::Label(&mut record.frequency),
            Self::Power => Slot::Value(&mut record.power),
            Self::Snr => Slot::Value(&mut record.snr),
            Self::Corrected => Slot::Value(&mut record.corrected),
            Self::Uncorrectable => Slot::Value(&mut record.uncorrectable),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamField {
    Channel,
    Status,
    ChannelType,
    ChannelId,
    SymbolRate,
    Frequency,
    Power,
}

impl ChannelField for UpstreamField {
    type Record = UpstreamChannel;

    const CHANNEL: Self = Self::Channel;

    fn name(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Status => "status",
            Self::ChannelType => "type",
            Self::ChannelId => "channel_id",
            Self::SymbolRate => "symbol_rate",
            Self::Frequency => "frequency",
            Self::Power => "power",
        }
    }

    fn slot(self, record: &mut UpstreamChannel) -> Slot<'_> {
        match self {
            Self::Channel => Slot::Label(&mut record.channel),
            Self::Status => Slot::Label(&mut record.status),
            Self::ChannelType => Slot::Label(&mut record.channel_type),
            Self::ChannelId => Slot::Label(&mut record.channel_id),
            Self::SymbolRate => Slot::Label(&mut record.symbol_rate),
            Self::Frequency => Slot::Label(&mut record.frequency),
            Self::Power => Slot::Value(&mut record.power),
        }
    }
}

/// Position of a field within a channel table row
#[derive(Debug, Clone, Copy)]
pub struct Column<F> {
    pub field: F,
    /// 1-based cell position, as in `td:nth-child(n)`
    pub position: usize,
    /// Unit stripped before parsing numeric cells; `None` for bare numbers
    pub unit: Option<&'static str>,
}

const fn label<F>(field: F, position: usize) -> Column<F> {
    Column {
        field,
        position,
        unit: None,
    }
}

const fn value<F>(field: F, position: usize, unit: Option<&'static str>) -> Column<F> {
    Column {
        field,
        position,
        unit,
    }
}

/// Declarative locator table for one firmware family
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    pub name: &'static str,
    pub model: &'static str,
    pub hardware_version: &'static str,
    pub software_version: &'static str,
    pub uptime: &'static str,
    pub boot_status_rows: &'static str,
    pub downstream_rows: &'static str,
    pub upstream_rows: &'static str,
    /// Leading rows of each channel table that carry headings
    pub header_rows: usize,
    pub downstream_columns: &'static [Column<DownstreamField>],
    pub upstream_columns: &'static [Column<UpstreamField>],
}

impl PageLayout {
    /// Arris TG3482G / SB6183 style `RgSwInfo.asp` and `RgConnect.asp`
    pub const TG3482G: PageLayout = PageLayout {
        name: "TG3482G",
        model: "#thisModelNumberIs",
        hardware_version: "#bg3 > div.container > div.content > table:nth-child(2) > tbody > tr:nth-child(3) > td:nth-child(2)",
        software_version: "#bg3 > div.container > div.content > table:nth-child(2) > tbody > tr:nth-child(4) > td:nth-child(2)",
        uptime: "#bg3 > div.container > div.content > table:nth-child(5) > tbody > tr:nth-child(2) > td:nth-child(2)",
        boot_status_rows: "#bg3 > div.container > div.content > form > table > tbody > tr",
        downstream_rows: "#bg3 > div.container > div.content > form > center:nth-child(4) > table > tbody > tr",
        upstream_rows: "#bg3 > div.container > div.content > form > center:nth-child(7) > table > tbody > tr",
        header_rows: 2,
        downstream_columns: &[
            label(DownstreamField::Channel, 1),
            label(DownstreamField::Status, 2),
            label(DownstreamField::Modulation, 3),
            label(DownstreamField::ChannelId, 4),
            label(DownstreamField::Frequency, 5),
            value(DownstreamField::Power, 6, Some(" dBmV")),
            value(DownstreamField::Snr, 7, Some(" dB")),
            value(DownstreamField::Corrected, 8, None),
            value(DownstreamField::Uncorrectable, 9, None),
        ],
        upstream_columns: &[
            label(UpstreamField::Channel, 1),
            label(UpstreamField::Status, 2),
            label(UpstreamField::ChannelType, 3),
            label(UpstreamField::ChannelId, 4),
            label(UpstreamField::SymbolRate, 5),
            label(UpstreamField::Frequency, 6),
            value(UpstreamField::Power, 7, Some(" dBmV")),
        ],
    };
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::TG3482G
    }
}

/// Channel column with its cell selector compiled
pub struct CompiledColumn<F> {
    pub column: Column<F>,
    pub cell: Selector,
}

/// [`PageLayout`] with every locator parsed into a selector
pub struct CompiledLayout {
    pub name: &'static str,
    pub model: Selector,
    pub hardware_version: Selector,
    pub software_version: Selector,
    pub uptime: Selector,
    pub boot_status_rows: Selector,
    pub boot_title: Selector,
    pub boot_value: Selector,
    pub downstream_rows: Selector,
    pub upstream_rows: Selector,
    pub header_rows: usize,
    pub downstream_columns: Vec<CompiledColumn<DownstreamField>>,
    pub upstream_columns: Vec<CompiledColumn<UpstreamField>>,
}

impl CompiledLayout {
    /// Parses all locators of a layout
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` naming the first locator that is not a valid selector.
    pub fn compile(layout: &PageLayout) -> Result<Self> {
        Ok(Self {
            name: layout.name,
            model: parse_selector(layout.model)?,
            hardware_version: parse_selector(layout.hardware_version)?,
            software_version: parse_selector(layout.software_version)?,
            uptime: parse_selector(layout.uptime)?,
            boot_status_rows: parse_selector(layout.boot_status_rows)?,
            boot_title: cell_selector(1)?,
            boot_value: cell_selector(2)?,
            downstream_rows: parse_selector(layout.downstream_rows)?,
            upstream_rows: parse_selector(layout.upstream_rows)?,
            header_rows: layout.header_rows,
            downstream_columns: compile_columns(layout.downstream_columns)?,
            upstream_columns: compile_columns(layout.upstream_columns)?,
        })
    }
}

fn compile_columns<F: Copy>(columns: &[Column<F>]) -> Result<Vec<CompiledColumn<F>>> {
    columns
        .iter()
        .map(|column| {
            Ok(CompiledColumn {
                column: *column,
                cell: cell_selector(column.position)?,
            })
        })
        .collect()
}

fn cell_selector(position: usize) -> Result<Selector> {
    parse_selector(&format!("td:nth-child({position})"))
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| AppError::Config(format!("Invalid page locator '{css}': {e}")))
}
