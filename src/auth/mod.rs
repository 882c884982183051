use axum::http::HeaderMap;


/// Check the admin passphrase carried in the HTTP Authorization header.
///
/// Expected format: "Authorization: Bearer <passphrase>"
/// The comparison is exact string equality against the configured secret.
pub fn require_passphrase(headers: &HeaderMap, expected: &str) -> Result<(), PassphraseError> {
    let provided = extract_bearer(headers)?;
    if provided != expected {
        return Err(PassphraseError::Mismatch);
    }
    Ok(())
}

/// Extract bearer value from HTTP Authorization header
fn extract_bearer(headers: &HeaderMap) -> Result<String, PassphraseError> {
    // Get Authorization header
    let auth_header = headers
        .get("authorization")
        .ok_or(PassphraseError::Missing)?
        .to_str()
        .map_err(|_| PassphraseError::InvalidFormat)?;

    parse_bearer(auth_header)
}

/// Parse bearer value from Authorization header value
///
/// Internal helper for extract_bearer
fn parse_bearer(header_value: &str) -> Result<String, PassphraseError> {
    // Expect "Bearer <passphrase>"
    let parts: Vec<&str> = header_value.splitn(2, ' ').collect();

    if parts.len() != 2 {
        return Err(PassphraseError::InvalidFormat);
    }

    // Check scheme is "Bearer"
    if parts[0].to_lowercase() != "bearer" {
        return Err(PassphraseError::InvalidFormat);
    }

    let passphrase = parts[1].trim();

    if passphrase.is_empty() {
        return Err(PassphraseError::Empty);
    }

    Ok(passphrase.to_string())
}

/// Passphrase check errors
#[derive(Debug, PartialEq, Clone)]
pub enum PassphraseError {
    /// Authorization header not present
    Missing,
    /// Invalid format (not "Bearer <passphrase>")
    InvalidFormat,
    /// Passphrase is empty string
    Empty,
    /// Passphrase does not match the configured secret
    Mismatch,
}

impl std::fmt::Display for PassphraseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassphraseError::Missing => write!(f, "Admin passphrase not provided"),
            PassphraseError::InvalidFormat => write!(f, "Invalid admin passphrase format"),
            PassphraseError::Empty => write!(f, "Admin passphrase is empty"),
            PassphraseError::Mismatch => write!(f, "Admin passphrase does not match"),
        }
    }
}

impl std::error::Error for PassphraseError {}
