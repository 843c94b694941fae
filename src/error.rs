// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Profile(String),
    Relay(RelayError),
}

/// Specific error types for email-relay failures.
///
/// The variants never reach the page UI verbatim; the contact form shows a
/// generic failure message and the detail goes to the diagnostics log.
#[derive(Debug, Clone)]
pub enum RelayError {
    /// No relay credentials were configured in settings.toml.
    NotConfigured,

    /// The request never reached the relay (DNS, connection refused, TLS).
    Network(String),

    /// The request timed out before the relay answered.
    Timeout,

    /// The relay answered with a non-success HTTP status.
    Rejected { status: u16, detail: String },

    /// The payload could not be serialized.
    InvalidPayload(String),

    /// Generic error with raw message.
    Other(String),
}

impl RelayError {
    /// Returns the i18n message key for this error type.
    ///
    /// All variants currently resolve to the same generic failure message;
    /// the split exists for the diagnostics log, not the UI.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RelayError::NotConfigured
            | RelayError::Network(_)
            | RelayError::Timeout
            | RelayError::Rejected { .. }
            | RelayError::InvalidPayload(_)
            | RelayError::Other(_) => "contact-failed",
        }
    }

    /// Attempts to parse a raw transport error message into a specific
    /// `RelayError` type. Used to categorize errors surfaced by the HTTP
    /// client as plain strings.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("timed out") || msg_lower.contains("timeout") {
            return RelayError::Timeout;
        }

        if msg_lower.contains("dns")
            || msg_lower.contains("connect")
            || msg_lower.contains("connection")
            || msg_lower.contains("certificate")
            || msg_lower.contains("tls")
        {
            return RelayError::Network(msg.to_string());
        }

        if msg_lower.contains("serialize") || msg_lower.contains("json") {
            return RelayError::InvalidPayload(msg.to_string());
        }

        RelayError::Other(msg.to_string())
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::NotConfigured => write!(f, "Relay is not configured"),
            RelayError::Network(msg) => write!(f, "Network error: {}", msg),
            RelayError::Timeout => write!(f, "Relay request timed out"),
            RelayError::Rejected { status, detail } => {
                write!(f, "Relay rejected the message (HTTP {}): {}", status, detail)
            }
            RelayError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            RelayError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Profile(e) => write!(f, "Profile Error: {}", e),
            Error::Relay(e) => write!(f, "Relay Error: {}", e),
        }
    }
}

impl From<RelayError> for Error {
    fn from(err: RelayError) -> Self {
        Error::Relay(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
