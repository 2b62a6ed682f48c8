//! Error types for adapters.

use thiserror::Error;

/// Errors that can occur when talking to the registry or the mail transport.
///
/// The first four variants are raised by the registry fetcher and abort a
/// run. The last three are raised per recipient by a mailer and are only
/// ever logged.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// A sender or recipient address could not be parsed.
    #[error("Invalid address: {0}")]
    Address(String),

    /// The message could not be assembled.
    #[error("Failed to build message: {0}")]
    Message(String),

    /// SMTP submission failed.
    #[error("SMTP delivery failed: {0}")]
    Smtp(String),
}

impl AdapterError {
    /// Whether this error came from the mail transport side.
    pub fn is_delivery(&self) -> bool {
        matches!(
            self,
            AdapterError::Address(_) | AdapterError::Message(_) | AdapterError::Smtp(_)
        )
    }
}

#[cfg(feature = "registry")]
impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AdapterError::Timeout
        } else if err.is_connect() {
            AdapterError::Connection(err.to_string())
        } else if err.is_decode() {
            AdapterError::Parse(err.to_string())
        } else {
            AdapterError::Http(err.to_string())
        }
    }
}

#[cfg(feature = "smtp")]
impl From<lettre::address::AddressError> for AdapterError {
    fn from(err: lettre::address::AddressError) -> Self {
        AdapterError::Address(err.to_string())
    }
}

#[cfg(feature = "smtp")]
impl From<lettre::error::Error> for AdapterError {
    fn from(err: lettre::error::Error) -> Self {
        AdapterError::Message(err.to_string())
    }
}

#[cfg(feature = "smtp")]
impl From<lettre::transport::smtp::Error> for AdapterError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        AdapterError::Smtp(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_delivery() {
        assert!(AdapterError::Smtp("550".into()).is_delivery());
        assert!(AdapterError::Address("nope".into()).is_delivery());
        assert!(!AdapterError::Timeout.is_delivery());
        assert!(!AdapterError::Http("500".into()).is_delivery());
    }

    #[test]
    fn test_display() {
        let err = AdapterError::Http("API returned status 503".into());
        assert_eq!(err.to_string(), "HTTP request failed: API returned status 503");
    }
}
