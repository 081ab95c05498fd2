// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics collection orchestration
//!
//! Runs scrape cycles against the modem on a fixed interval and publishes
//! each fully successful snapshot.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::ScrapeError;
use crate::metrics::{MetricSnapshot, MetricsRegistry};
use crate::modem::ModemClient;

/// Fetches both pages, extracts their records and projects them to a snapshot
///
/// # Errors
///
/// Any fetch or extraction failure aborts the cycle; no partial snapshot is produced.
pub async fn scrape(client: &ModemClient) -> Result<MetricSnapshot, ScrapeError> {
    let report = client.scrape().await?;
    Ok(MetricSnapshot::project(&report))
}

/// Runs one scrape cycle and records its outcome
///
/// Returns `true` if a new snapshot was published.
pub async fn run_scrape_cycle(client: &ModemClient, metrics: &MetricsRegistry) -> bool {
    let start = Instant::now();
    match scrape(client).await {
        Ok(snapshot) => {
            let duration = start.elapsed().as_secs_f64();
            tracing::debug!(
                "Scraped {} in {:.3}s: {} downstream, {} upstream channels",
                client.base_url(),
                duration,
                snapshot.downstream_channels(),
                snapshot.upstream_channels()
            );
            metrics.publish(snapshot).await;
            metrics.record_scrape_success(duration);
            true
        }
        Err(e) => {
            let duration = start.elapsed().as_secs_f64();
            metrics.record_scrape_error(e.kind(), duration);
            if e.is_schema_drift() {
                tracing::error!(
                    "Modem page layout mismatch at {} after {:.3}s: {}",
                    client.base_url(),
                    duration,
                    e
                );
            } else {
                tracing::warn!(
                    "Failed to scrape {} in {:.3}s: {}",
                    client.base_url(),
                    duration,
                    e
                );
            }
            tracing::trace!("Error details: {:?}", e);
            false
        }
    }
}

/// Starts the background scrape loop
///
/// The first cycle runs immediately. Cycles never overlap: a slow scrape
/// delays the next tick. A shutdown signal (the channel turning `true` or
/// its sender going away) drops an in-flight scrape without publishing
/// anything; other updates on the channel are ignored.
pub fn start_collection_loop(
    mut shutdown_rx: watch::Receiver<bool>,
    client: Arc<ModemClient>,
    metrics: MetricsRegistry,
    interval: Duration,
) -> JoinHandle<()> {
    tracing::info!(
        "Starting background collection loop every {}s",
        interval.as_secs_f64()
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {},
                _ = shutdown_rx.wait_for(|stop| *stop) => {
                    tracing::info!("Stopping collection loop");
                    break;
                }
            }

            tokio::select! {
                _ = run_scrape_cycle(&client, &metrics) => {},
                _ = shutdown_rx.wait_for(|stop| *stop) => {
                    tracing::info!("Scrape cancelled, stopping collection loop");
                    break;
                }
            }
        }
    })
}
