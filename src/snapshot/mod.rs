use crate::record::{Alert, Broadcast, CleanlinessReport, LostFoundItem};
use crate::store::SessionStore;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};


/// File name offered when the export document is downloaded.
pub const EXPORT_FILE_NAME: &str = "digikumbh_demo_data.json";

/// Point-in-time serialization of all four collections.
///
/// Field names and ordering match the demo's export document; the heatmap
/// point list is static seed data and is not part of the export.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub clean_reports: Vec<CleanlinessReport>,
    pub lostfound: Vec<LostFoundItem>,
    pub alerts: Vec<Alert>,
    pub broadcasts: Vec<Broadcast>,
}

impl Snapshot {
    /// Create a snapshot from current store contents. Read-only; the store is
    /// unchanged.
    pub fn from_store(store: &SessionStore) -> Self {
        Self {
            clean_reports: store.clean_reports().to_vec(),
            lostfound: store.lostfound().to_vec(),
            alerts: store.alerts().to_vec(),
            broadcasts: store.broadcasts().to_vec(),
        }
    }

    /// Serialize to the pretty-printed JSON document offered for download.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize snapshot to JSON")
    }

    /// Total record count across collections (for logging/display).
    pub fn record_count(&self) -> usize {
        self.clean_reports.len() + self.lostfound.len() + self.alerts.len() + self.broadcasts.len()
    }
}
