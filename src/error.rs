// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for Arris Exporter application

use thiserror::Error;

use crate::modem::Page;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of a single scrape cycle.
///
/// Any variant aborts the whole cycle; nothing from it is published.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network failure or request timeout
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Modem answered with something other than 200
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Body could not be read as an HTML document
    #[error("{url} returned a malformed document: {reason}")]
    MalformedDocument { url: String, reason: String },

    /// Expected element missing from the page markup
    #[error("{page}: {field} not found")]
    FieldNotFound { page: Page, field: String },

    /// Cell present but not a number
    #[error("{page}: malformed {field} {value:?} on channel {channel}")]
    MalformedNumber {
        page: Page,
        channel: String,
        field: &'static str,
        value: String,
    },

    /// Uptime cell present but not a "N days H:MM:SS" duration
    #[error("{page}: malformed uptime {value:?}")]
    MalformedDuration { page: Page, value: String },
}

impl ScrapeError {
    /// Short stable name, used as the `kind` label of the error counter
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::HttpStatus { .. } => "http_status",
            Self::MalformedDocument { .. } => "malformed_document",
            Self::FieldNotFound { .. } => "field_not_found",
            Self::MalformedNumber { .. } => "malformed_number",
            Self::MalformedDuration { .. } => "malformed_duration",
        }
    }

    /// True when the markup no longer matches the firmware layout.
    ///
    /// These recur on every cycle until the layout table is updated.
    #[must_use]
    pub fn is_schema_drift(&self) -> bool {
        matches!(
            self,
            Self::FieldNotFound { .. }
                | Self::MalformedNumber { .. }
                | Self::MalformedDuration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = AppError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_metrics_error() {
        let err = AppError::Metrics("encoding failed".to_string());
        assert_eq!(err.to_string(), "Metrics error: encoding failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_addr_parse_error_conversion() {
        let parse_result = "invalid".parse::<std::net::IpAddr>();
        assert!(parse_result.is_err());
        let app_err: AppError = parse_result.unwrap_err().into();
        assert!(matches!(app_err, AppError::AddrParse(_)));
    }

    #[test]
    fn test_malformed_number_names_channel() {
        let err = ScrapeError::MalformedNumber {
            page: Page::Status,
            channel: "7".to_string(),
            field: "snr",
            value: "n/a dB".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "/RgConnect.asp: malformed snr \"n/a dB\" on channel 7"
        );
        assert_eq!(err.kind(), "malformed_number");
        assert!(err.is_schema_drift());
    }

    #[test]
    fn test_transient_errors_are_not_schema_drift() {
        let status = ScrapeError::HttpStatus {
            url: "http://modem/RgSwInfo.asp".to_string(),
            status: 500,
        };
        let document = ScrapeError::MalformedDocument {
            url: "http://modem/RgSwInfo.asp".to_string(),
            reason: "empty body".to_string(),
        };
        assert!(!status.is_schema_drift());
        assert!(!document.is_schema_drift());
        assert_eq!(document.kind(), "malformed_document");
    }

    #[test]
    fn test_field_not_found_display() {
        let err = ScrapeError::FieldNotFound {
            page: Page::Info,
            field: "uptime".to_string(),
        };
        assert_eq!(err.to_string(), "/RgSwInfo.asp: uptime not found");
        assert_eq!(err.kind(), "field_not_found");
    }
}
