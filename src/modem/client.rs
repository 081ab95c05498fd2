// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP client for the modem web interface

use std::time::Duration;

use scraper::Html;

use super::extract::{extract_boot_status, extract_downstream, extract_info, extract_upstream};
use super::layout::{CompiledLayout, PageLayout};
use super::types::{ModemReport, Page};
use crate::config::Config;
use crate::error::{AppError, Result, ScrapeError};

/// Arris modem web interface client
///
/// Fetches the info and connection status pages and extracts their records.
pub struct ModemClient {
    base_url: String,
    http: reqwest::Client,
    layout: CompiledLayout,
}

impl ModemClient {
    /// Creates a client for the configured modem using the default firmware layout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_layout(
            format!("http://{}", config.modem_host),
            config.request_timeout,
            &PageLayout::default(),
        )
    }

    /// Creates a client against an explicit base URL and firmware layout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or a locator is invalid.
    pub fn with_layout(
        base_url: impl Into<String>,
        timeout: Duration,
        layout: &PageLayout,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            layout: CompiledLayout::compile(layout)?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs one full scrape: info page, then status page
    ///
    /// # Errors
    ///
    /// The first fetch or extraction failure aborts the scrape.
    pub async fn scrape(&self) -> std::result::Result<ModemReport, ScrapeError> {
        let body = self.fetch(Page::Info).await?;
        let info = {
            let doc = Html::parse_document(&body);
            extract_info(&doc, &self.layout)?
        };

        let body = self.fetch(Page::Status).await?;
        let doc = Html::parse_document(&body);
        let boot_status = extract_boot_status(&doc, &self.layout);
        let downstream = extract_downstream(&doc, &self.layout)?;
        let upstream = extract_upstream(&doc, &self.layout)?;

        tracing::trace!(
            "Extracted {} boot entries, {} downstream and {} upstream channels",
            boot_status.len(),
            downstream.len(),
            upstream.len()
        );

        Ok(ModemReport {
            info,
            boot_status,
            downstream,
            upstream,
        })
    }

    /// Fetches one page and returns its HTML body
    ///
    /// The body is parsed by the caller; the parsed tree is not `Send` and
    /// must not live across an await point.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure or timeout, `HttpStatus` on a non-200
    /// answer, `MalformedDocument` if the body is empty or not UTF-8.
    pub async fn fetch(&self, page: Page) -> std::result::Result<String, ScrapeError> {
        let url = format!("{}{}", self.base_url, page.path());
        tracing::trace!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ScrapeError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ScrapeError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ScrapeError::Transport {
                url: url.clone(),
                source,
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ScrapeError::MalformedDocument {
                url,
                reason: "empty body".to_string(),
            });
        }

        String::from_utf8(bytes.to_vec()).map_err(|e| ScrapeError::MalformedDocument {
            url,
            reason: e.to_string(),
        })
    }
}
