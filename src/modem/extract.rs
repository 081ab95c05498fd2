// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Extraction of typed records from the modem status pages
//!
//! Positional locators are a contract with one firmware's markup. A missing
//! element is reported as `FieldNotFound` instead of being guessed around.

use scraper::{ElementRef, Html, Selector};

use super::layout::{ChannelField, CompiledColumn, CompiledLayout, Slot, expected_boot_value};
use super::types::{BootStatusEntry, DownstreamChannel, ModemInfo, Page, UpstreamChannel};
use super::units::{parse_plain_float, parse_suffixed_float, parse_uptime};
use crate::error::ScrapeError;

/// Reads model, versions and uptime from the info page
///
/// # Errors
///
/// `FieldNotFound` if a locator matches nothing, `MalformedDuration` if the
/// uptime cell does not parse.
pub fn extract_info(doc: &Html, layout: &CompiledLayout) -> Result<ModemInfo, ScrapeError> {
    let model = field_text(doc, &layout.model, "model")?;
    let hardware_version = field_text(doc, &layout.hardware_version, "hardware version")?;
    let software_version = field_text(doc, &layout.software_version, "software version")?;
    let uptime_text = field_text(doc, &layout.uptime, "uptime")?;

    let uptime = parse_uptime(&uptime_text).map_err(|_| ScrapeError::MalformedDuration {
        page: Page::Info,
        value: uptime_text.clone(),
    })?;

    Ok(ModemInfo {
        model: model.trim().to_string(),
        hardware_version: hardware_version.trim().to_string(),
        software_version: software_version.trim().to_string(),
        uptime,
    })
}

/// Reads the startup procedure table
///
/// Rows whose title is not one of the recognized procedures are skipped.
#[must_use]
pub fn extract_boot_status(doc: &Html, layout: &CompiledLayout) -> Vec<BootStatusEntry> {
    doc.select(&layout.boot_status_rows)
        .filter_map(|row| {
            let title = cell_text(row, &layout.boot_title)?;
            let expected = expected_boot_value(&title)?;
            let actual = cell_text(row, &layout.boot_value).unwrap_or_default();
            Some(BootStatusEntry {
                label: title.replace(' ', "_").to_lowercase(),
                healthy: actual == expected,
            })
        })
        .collect()
}

/// Reads every data row of the downstream channel table
///
/// # Errors
///
/// Fails on the first row with a missing or malformed cell.
pub fn extract_downstream(
    doc: &Html,
    layout: &CompiledLayout,
) -> Result<Vec<DownstreamChannel>, ScrapeError> {
    extract_channels(
        doc,
        &layout.downstream_rows,
        layout.header_rows,
        &layout.downstream_columns,
        "downstream",
    )
}

/// Reads every data row of the upstream channel table
///
/// # Errors
///
/// Fails on the first row with a missing or malformed cell.
pub fn extract_upstream(
    doc: &Html,
    layout: &CompiledLayout,
) -> Result<Vec<UpstreamChannel>, ScrapeError> {
    extract_channels(
        doc,
        &layout.upstream_rows,
        layout.header_rows,
        &layout.upstream_columns,
        "upstream",
    )
}

fn extract_channels<F: ChannelField>(
    doc: &Html,
    rows: &Selector,
    header_rows: usize,
    columns: &[CompiledColumn<F>],
    table: &str,
) -> Result<Vec<F::Record>, ScrapeError> {
    let rows: Vec<ElementRef<'_>> = doc.select(rows).collect();
    if rows.len() < header_rows {
        return Err(ScrapeError::FieldNotFound {
            page: Page::Status,
            field: format!("{table} channel table"),
        });
    }

    rows.into_iter()
        .skip(header_rows)
        .enumerate()
        .map(|(index, row)| extract_channel(row, index, columns, table))
        .collect()
}

fn extract_channel<F: ChannelField>(
    row: ElementRef<'_>,
    index: usize,
    columns: &[CompiledColumn<F>],
    table: &str,
) -> Result<F::Record, ScrapeError> {
    let channel = columns
        .iter()
        .find(|c| c.column.field == F::CHANNEL)
        .and_then(|c| cell_text(row, &c.cell))
        .map(|text| text.trim().to_string())
        .unwrap_or_else(|| format!("row {}", index + 1));

    let mut record = F::Record::default();
    for compiled in columns {
        let column = compiled.column;
        let text =
            cell_text(row, &compiled.cell).ok_or_else(|| ScrapeError::FieldNotFound {
                page: Page::Status,
                field: format!("{table} channel {channel} {}", column.field.name()),
            })?;

        match column.field.slot(&mut record) {
            Slot::Label(slot) => *slot = text.trim().to_string(),
            Slot::Value(slot) => {
                let parsed = match column.unit {
                    Some(unit) => parse_suffixed_float(&text, unit),
                    None => parse_plain_float(&text),
                };
                *slot = parsed.map_err(|_| ScrapeError::MalformedNumber {
                    page: Page::Status,
                    channel: channel.clone(),
                    field: column.field.name(),
                    value: text.clone(),
                })?;
            }
        }
    }
    Ok(record)
}

fn field_text(doc: &Html, selector: &Selector, field: &str) -> Result<String, ScrapeError> {
    doc.select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .ok_or_else(|| ScrapeError::FieldNotFound {
            page: Page::Info,
            field: field.to_string(),
        })
}

fn cell_text(row: ElementRef<'_>, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|cell| cell.text().collect::<String>())
}
