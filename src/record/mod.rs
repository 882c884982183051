use serde::{Deserialize, Serialize};

mod validation;
#[cfg(test)]
mod tests;

pub use validation::{validate, ValidationError};

/// Wall-clock timestamp format shared by every record type.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current wall-clock time in the shared record format.
pub fn now_stamp() -> String {
    chrono::Local::now().format(TIME_FORMAT).to_string()
}

/// CleanlinessReport represents one user-submitted cleanliness issue.
///
/// Created by a devotee submission; read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanlinessReport {
    /// Where the issue was observed (e.g., "Ghat A - Sector 1")
    pub location: String,

    /// Free-form issue description
    pub issue: String,

    /// Stamped by the store at append time; seed files may carry their own
    #[serde(default)]
    pub time: String,
}

/// LostFoundItem represents one reported lost item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LostFoundItem {
    /// Short item title (e.g., "Black mobile")
    pub item: String,

    /// Details (colors, marks, where lost); may be empty
    #[serde(default)]
    pub desc: String,

    /// Last seen location
    pub location: String,

    #[serde(default)]
    pub time: String,
}

/// Alert represents one emergency alert visible in the control room.
///
/// Created by a user SOS action or seed data; removable by admin
/// ("mark resolved" removes it from the collection).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert category (e.g., "SOS")
    #[serde(rename = "type")]
    pub kind: String,

    /// Who raised the alert
    pub from: String,

    pub location: String,

    #[serde(default)]
    pub time: String,

    pub message: String,
}

/// Broadcast represents one admin announcement. Never removed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Broadcast {
    pub message: String,

    #[serde(default)]
    pub time: String,
}

/// HeatmapPoint is one fixed crowd-density sample. Read-only seed data,
/// never user-mutable and never part of the export document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeatmapPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Relative density in [0, 1]
    pub intensity: f64,
}

/// A record destined for one of the four mutable collections.
///
/// Serializes as the inner record object (no variant tag), matching the
/// per-collection JSON shapes above.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Clean(CleanlinessReport),
    LostFound(LostFoundItem),
    Alert(Alert),
    Broadcast(Broadcast),
}

impl Record {
    /// Validates required fields for this record's type.
    ///
    /// Returns Ok(()) if the record may enter its collection,
    /// Err(ValidationError) naming the first missing field otherwise.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate(self)
    }

    /// Overwrites the record's `time` field. Called by the store at append
    /// time so creation stamps are uniform across collections.
    pub(crate) fn stamp_time(&mut self, stamp: String) {
        match self {
            Record::Clean(r) => r.time = stamp,
            Record::LostFound(r) => r.time = stamp,
            Record::Alert(r) => r.time = stamp,
            Record::Broadcast(r) => r.time = stamp,
        }
    }
}
