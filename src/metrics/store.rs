// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Single-slot store for the last published snapshot

use std::sync::Arc;

use tokio::sync::RwLock;

use super::snapshot::MetricSnapshot;

/// Holds the most recent fully built snapshot
///
/// A new snapshot replaces the old one in a single write; readers get a
/// shared handle and never see a partially built value.
#[derive(Clone, Default)]
pub struct SnapshotStore {
    slot: Arc<RwLock<Option<Arc<MetricSnapshot>>>>,
}

impl SnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn publish(&self, snapshot: MetricSnapshot) {
        let snapshot = Arc::new(snapshot);
        let mut slot = self.slot.write().await;
        *slot = Some(snapshot);
    }

    pub async fn current(&self) -> Option<Arc<MetricSnapshot>> {
        self.slot.read().await.clone()
    }
}
