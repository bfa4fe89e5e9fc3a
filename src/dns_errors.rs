// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! DNS operation and HTTP API error types for zonectl.
//!
//! This module provides specialized error types for:
//! - Provider HTTP API operations (transport, authentication, status, payload)
//! - Module parameter validation
//! - DNS record operations on a provider
//!
//! Operations return these through `anyhow::Error` with added context; the
//! binary recovers the typed error with `downcast_ref` to classify the failure.

use thiserror::Error;

use crate::http_errors::{map_connection_error, map_http_error_to_reason};
use crate::status_reasons::{
    REASON_API_AUTH_FAILED, REASON_INVALID_PARAMETERS, REASON_MALFORMED_RESPONSE,
    REASON_OPERATION_FAILED, REASON_ZONE_NOT_FOUND,
};

/// Errors that can occur while talking to a provider HTTP API.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// HTTP connection failed (network unreachable, connection refused, TLS failure)
    ///
    /// Returned when no HTTP response was received at all.
    #[error("HTTP connection to {endpoint} failed: {reason}")]
    ConnectionFailed {
        /// The URL that couldn't be reached
        endpoint: String,
        /// Reason for the connection failure
        reason: String,
    },

    /// The API refused the credential (HTTP 401 or 403)
    #[error("Authentication rejected by {endpoint} (HTTP {status_code})")]
    AuthenticationFailed {
        /// The URL that rejected the request
        endpoint: String,
        /// HTTP status code (401 or 403)
        status_code: u16,
    },

    /// Any other non-success HTTP response
    #[error("{method} {endpoint} returned HTTP {status_code}: {message}")]
    UnexpectedStatus {
        /// HTTP method of the failed request
        method: String,
        /// The URL that returned the response
        endpoint: String,
        /// HTTP status code
        status_code: u16,
        /// Response body or error message
        message: String,
    },

    /// A success response whose body does not have the expected shape
    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse {
        /// The URL that returned the response
        endpoint: String,
        /// Explanation of what could not be parsed
        reason: String,
    },
}

impl ApiError {
    /// HTTP status code carried by this error, if a response was received.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed { status_code, .. }
            | Self::UnexpectedStatus { status_code, .. } => Some(*status_code),
            Self::ConnectionFailed { .. } | Self::MalformedResponse { .. } => None,
        }
    }

    /// Short operator-facing description of the failure class.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::ConnectionFailed { .. } => map_connection_error().1,
            Self::AuthenticationFailed { status_code, .. }
            | Self::UnexpectedStatus { status_code, .. } => {
                map_http_error_to_reason(*status_code).1
            }
            Self::MalformedResponse { .. } => {
                "DNS API returned a response that could not be parsed".to_string()
            }
        }
    }

    /// Returns the reason code for this error.
    #[must_use]
    pub fn status_reason(&self) -> &'static str {
        match self {
            Self::ConnectionFailed { .. } => map_connection_error().0,
            Self::AuthenticationFailed { .. } => REASON_API_AUTH_FAILED,
            Self::UnexpectedStatus { status_code, .. } => map_http_error_to_reason(*status_code).0,
            Self::MalformedResponse { .. } => REASON_MALFORMED_RESPONSE,
        }
    }
}

/// Errors raised while validating module parameters.
///
/// No request is ever sent when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required parameter is absent or empty
    #[error("Missing required parameter '{name}'")]
    MissingParameter {
        /// The parameter name
        name: String,
    },

    /// A parameter is present but its value is not acceptable
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name
        name: String,
        /// Explanation of what is invalid
        reason: String,
    },

    /// The API URL cannot be used as a request base
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as given
        url: String,
        /// Explanation of what is invalid
        reason: String,
    },

    /// The zone name is not a valid domain name
    #[error("Invalid zone name '{zone}': {reason}")]
    InvalidZoneName {
        /// The zone name as given
        zone: String,
        /// Explanation of what is invalid
        reason: String,
    },

    /// No record provider is registered under this name
    #[error("Unsupported DNS provider '{provider}'")]
    UnsupportedProvider {
        /// The provider name as given
        provider: String,
    },
}

/// Errors that can occur during DNS record operations on a provider.
#[derive(Error, Debug, Clone)]
pub enum RecordError {
    /// The zone addressed by a record operation does not exist
    #[error("Zone '{zone}' not found on {endpoint}")]
    ZoneNotFound {
        /// The zone name
        zone: String,
        /// The provider endpoint that was queried
        endpoint: String,
    },
}

/// Composite error type that encompasses all zonectl errors.
#[derive(Error, Debug, Clone)]
pub enum DnsError {
    /// Provider API error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Parameter validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// DNS record error
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Generic error for operations that don't fit other categories
    #[error("DNS operation failed: {0}")]
    Generic(String),
}

impl DnsError {
    /// Classify an `anyhow::Error` chain by the first typed error it carries.
    #[must_use]
    pub fn classify(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if let Some(api) = cause.downcast_ref::<ApiError>() {
                return Self::Api(api.clone());
            }
            if let Some(config) = cause.downcast_ref::<ConfigError>() {
                return Self::Config(config.clone());
            }
            if let Some(record) = cause.downcast_ref::<RecordError>() {
                return Self::Record(record.clone());
            }
        }
        Self::Generic(err.to_string())
    }

    /// Returns the reason code for this error.
    #[must_use]
    pub fn status_reason(&self) -> &'static str {
        match self {
            Self::Api(api) => api.status_reason(),
            Self::Config(_) => REASON_INVALID_PARAMETERS,
            Self::Record(RecordError::ZoneNotFound { .. }) => REASON_ZONE_NOT_FOUND,
            Self::Generic(_) => REASON_OPERATION_FAILED,
        }
    }
}
