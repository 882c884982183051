use crate::record::{
    now_stamp, Alert, Broadcast, CleanlinessReport, HeatmapPoint, LostFoundItem, Record,
    ValidationError,
};
use std::fmt;
use std::path::Path;

pub mod seed;
#[cfg(test)]
mod tests;

pub use seed::{SeedLoad, SeedSource};

/// The four mutable collections held by a session store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionKind {
    CleanReports,
    LostFound,
    Alerts,
    Broadcasts,
}

impl CollectionKind {
    /// Collection name as it appears in the export document.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::CleanReports => "clean_reports",
            CollectionKind::LostFound => "lostfound",
            CollectionKind::Alerts => "alerts",
            CollectionKind::Broadcasts => "broadcasts",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// SessionStore is the single source of truth for one session's demo state.
///
/// Four ordered collections (insertion order significant, newest last) plus a
/// fixed heatmap sample list. All mutation goes through `append` and
/// `remove_at`; readers get immutable slices, so callers cannot corrupt the
/// collections. A store is constructed at session start and discarded when
/// the session ends.
pub struct SessionStore {
    clean_reports: Vec<CleanlinessReport>,
    lostfound: Vec<LostFoundItem>,
    alerts: Vec<Alert>,
    broadcasts: Vec<Broadcast>,
    heatmap_points: Vec<HeatmapPoint>,
}

impl SessionStore {
    /// Store populated from the built-in sample records only.
    pub fn with_defaults() -> Self {
        Self {
            clean_reports: seed::default_clean_reports(),
            lostfound: seed::default_lostfound(),
            alerts: seed::default_alerts(),
            broadcasts: seed::default_broadcasts(),
            heatmap_points: seed::heatmap_points(),
        }
    }

    /// Store seeded from JSON files under `seed_dir`, one per collection.
    ///
    /// A missing or malformed file downgrades that collection to its built-in
    /// defaults; construction itself never fails.
    pub fn initialize(seed_dir: &Path) -> Self {
        Self {
            clean_reports: seed::clean_reports(seed_dir).records,
            lostfound: seed::lostfound(seed_dir).records,
            alerts: seed::alerts(seed_dir).records,
            broadcasts: seed::broadcasts(seed_dir).records,
            heatmap_points: seed::heatmap_points(),
        }
    }

    pub fn clean_reports(&self) -> &[CleanlinessReport] {
        &self.clean_reports
    }

    pub fn lostfound(&self) -> &[LostFoundItem] {
        &self.lostfound
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn broadcasts(&self) -> &[Broadcast] {
        &self.broadcasts
    }

    pub fn heatmap_points(&self) -> &[HeatmapPoint] {
        &self.heatmap_points
    }

    /// Number of records currently in `kind`.
    pub fn len(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::CleanReports => self.clean_reports.len(),
            CollectionKind::LostFound => self.lostfound.len(),
            CollectionKind::Alerts => self.alerts.len(),
            CollectionKind::Broadcasts => self.broadcasts.len(),
        }
    }

    /// Validates required fields, stamps `time` with the current wall clock,
    /// and appends the record to the end of its collection.
    ///
    /// Returns the record as stored. A validation failure leaves the
    /// collection untouched. Identical content always appends a new record;
    /// nothing is ever overwritten.
    pub fn append(&mut self, mut record: Record) -> Result<Record, ValidationError> {
        record.validate()?;
        record.stamp_time(now_stamp());

        let stored = record.clone();
        match record {
            Record::Clean(r) => self.clean_reports.push(r),
            Record::LostFound(r) => self.lostfound.push(r),
            Record::Alert(r) => self.alerts.push(r),
            Record::Broadcast(r) => self.broadcasts.push(r),
        }
        Ok(stored)
    }

    /// Removes exactly one record at the given zero-based storage position.
    ///
    /// The relative order of the remaining records is unchanged; positions
    /// after `position` shift down by one, so callers must re-derive any
    /// previously computed positions after this returns. An out-of-range
    /// position is rejected without side effects.
    pub fn remove_at(&mut self, kind: CollectionKind, position: usize) -> Result<Record, StoreError> {
        let len = self.len(kind);
        if position >= len {
            return Err(StoreError::OutOfRange {
                kind,
                position,
                len,
            });
        }

        let removed = match kind {
            CollectionKind::CleanReports => Record::Clean(self.clean_reports.remove(position)),
            CollectionKind::LostFound => Record::LostFound(self.lostfound.remove(position)),
            CollectionKind::Alerts => Record::Alert(self.alerts.remove(position)),
            CollectionKind::Broadcasts => Record::Broadcast(self.broadcasts.remove(position)),
        };
        Ok(removed)
    }
}

/// Store mutation errors
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Remove requested at a position that does not exist.
    OutOfRange {
        kind: CollectionKind,
        position: usize,
        len: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::OutOfRange {
                kind,
                position,
                len,
            } => {
                write!(
                    f,
                    "position {} out of range for {} (length {})",
                    position, kind, len
                )
            }
        }
    }
}

impl std::error::Error for StoreError {}
