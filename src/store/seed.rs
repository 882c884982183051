//! Seed loading with explicit fallback to built-in sample data.
//!
//! Each collection may be pre-populated from a JSON array file under the seed
//! directory. Absence or a parse error downgrades to the built-in defaults;
//! the caller never sees an error, only which source won.

use crate::record::{now_stamp, Alert, Broadcast, CleanlinessReport, HeatmapPoint, LostFoundItem};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Where a collection's initial contents came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// Parsed from the seed file.
    File,
    /// Built-in sample records (file absent or unreadable).
    Defaults,
}

/// One collection's seed result.
pub struct SeedLoad<T> {
    pub records: Vec<T>,
    pub source: SeedSource,
}

/// Seed file names under the seed directory, one per collection.
pub const CLEANLINESS_SEED_FILE: &str = "cleanliness.json";
pub const LOSTFOUND_SEED_FILE: &str = "lostfound.json";
pub const ALERTS_SEED_FILE: &str = "alerts.json";
pub const BROADCASTS_SEED_FILE: &str = "broadcasts.json";

pub fn clean_reports(seed_dir: &Path) -> SeedLoad<CleanlinessReport> {
    load_or_default(&seed_dir.join(CLEANLINESS_SEED_FILE), default_clean_reports())
}

pub fn lostfound(seed_dir: &Path) -> SeedLoad<LostFoundItem> {
    load_or_default(&seed_dir.join(LOSTFOUND_SEED_FILE), default_lostfound())
}

pub fn alerts(seed_dir: &Path) -> SeedLoad<Alert> {
    load_or_default(&seed_dir.join(ALERTS_SEED_FILE), default_alerts())
}

pub fn broadcasts(seed_dir: &Path) -> SeedLoad<Broadcast> {
    load_or_default(&seed_dir.join(BROADCASTS_SEED_FILE), default_broadcasts())
}

/// Reads a JSON array of records from `path`, substituting `defaults` on any
/// failure. Never errors: a bad seed file only costs its contents.
pub fn load_or_default<T: DeserializeOwned>(path: &Path, defaults: Vec<T>) -> SeedLoad<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Seed file not readable, using built-in defaults");
            return SeedLoad {
                records: defaults,
                source: SeedSource::Defaults,
            };
        }
    };

    match serde_json::from_str::<Vec<T>>(&contents) {
        Ok(records) => {
            info!(path = %path.display(), count = records.len(), "Seed file loaded");
            SeedLoad {
                records,
                source: SeedSource::File,
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Malformed seed file, using built-in defaults");
            SeedLoad {
                records: defaults,
                source: SeedSource::Defaults,
            }
        }
    }
}

/// Built-in sample reports shown when no seed file is present.
pub fn default_clean_reports() -> Vec<CleanlinessReport> {
    vec![
        CleanlinessReport {
            location: "Ghat A - Sector 1".to_string(),
            issue: "Overflowing dustbin".to_string(),
            time: now_stamp(),
        },
        CleanlinessReport {
            location: "Near Main Gate".to_string(),
            issue: "Water puddles".to_string(),
            time: now_stamp(),
        },
    ]
}

pub fn default_lostfound() -> Vec<LostFoundItem> {
    vec![LostFoundItem {
        item: "Black mobile".to_string(),
        desc: "OnePlus 8, cover".to_string(),
        location: "Ghat B".to_string(),
        time: now_stamp(),
    }]
}

pub fn default_alerts() -> Vec<Alert> {
    vec![Alert {
        kind: "SOS".to_string(),
        from: "User_123".to_string(),
        location: "Sector 4".to_string(),
        time: now_stamp(),
        message: "Help required, injury".to_string(),
    }]
}

pub fn default_broadcasts() -> Vec<Broadcast> {
    vec![Broadcast {
        message: "Please follow the signage near Ghat C".to_string(),
        time: now_stamp(),
    }]
}

/// Fixed demo heatmap sample points. Not seeded from files.
pub fn heatmap_points() -> Vec<HeatmapPoint> {
    vec![
        HeatmapPoint {
            latitude: 23.178,
            longitude: 75.775,
            intensity: 0.9,
        },
        HeatmapPoint {
            latitude: 23.179,
            longitude: 75.777,
            intensity: 0.7,
        },
        HeatmapPoint {
            latitude: 23.177,
            longitude: 75.776,
            intensity: 0.5,
        },
        HeatmapPoint {
            latitude: 23.176,
            longitude: 75.778,
            intensity: 0.4,
        },
        HeatmapPoint {
            latitude: 23.175,
            longitude: 75.774,
            intensity: 0.3,
        },
    ]
}
