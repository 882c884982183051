use super::{Alert, Broadcast, CleanlinessReport, LostFoundItem, Record};
use std::fmt;

/// Validation errors for record submissions
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingLocation,
    MissingIssue,
    MissingItem,
    MissingKind,
    MissingSender,
    MissingMessage,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingLocation => write!(f, "location is required"),
            ValidationError::MissingIssue => write!(f, "issue is required"),
            ValidationError::MissingItem => write!(f, "item is required"),
            ValidationError::MissingKind => write!(f, "type is required"),
            ValidationError::MissingSender => write!(f, "from is required"),
            ValidationError::MissingMessage => write!(f, "message is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates required fields for a record before it enters a collection.
///
/// Rules per record type:
/// - CleanlinessReport: location, issue
/// - LostFoundItem: item, location (desc may be empty)
/// - Alert: type, from, location, message
/// - Broadcast: message
///
/// Empty means the empty string; `time` is never checked here because the
/// store stamps it after validation succeeds.
pub fn validate(record: &Record) -> Result<(), ValidationError> {
    match record {
        Record::Clean(r) => validate_clean(r),
        Record::LostFound(r) => validate_lostfound(r),
        Record::Alert(r) => validate_alert(r),
        Record::Broadcast(r) => validate_broadcast(r),
    }
}

fn validate_clean(report: &CleanlinessReport) -> Result<(), ValidationError> {
    if report.location.is_empty() {
        return Err(ValidationError::MissingLocation);
    }
    if report.issue.is_empty() {
        return Err(ValidationError::MissingIssue);
    }
    Ok(())
}

fn validate_lostfound(item: &LostFoundItem) -> Result<(), ValidationError> {
    if item.item.is_empty() {
        return Err(ValidationError::MissingItem);
    }
    if item.location.is_empty() {
        return Err(ValidationError::MissingLocation);
    }
    Ok(())
}

fn validate_alert(alert: &Alert) -> Result<(), ValidationError> {
    if alert.kind.is_empty() {
        return Err(ValidationError::MissingKind);
    }
    if alert.from.is_empty() {
        return Err(ValidationError::MissingSender);
    }
    if alert.location.is_empty() {
        return Err(ValidationError::MissingLocation);
    }
    if alert.message.is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}

fn validate_broadcast(broadcast: &Broadcast) -> Result<(), ValidationError> {
    if broadcast.message.is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}
