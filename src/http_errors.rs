// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP error code mapping to result reason codes.
//!
//! This module maps HTTP status codes returned by a provider API to the
//! standardized reasons of [`crate::status_reasons`], so every failure
//! reported upstream carries a stable, machine-readable classification.
//!
//! # Usage
//!
//! ```rust
//! use zonectl::http_errors::map_http_error_to_reason;
//!
//! let (reason, message) = map_http_error_to_reason(401);
//! assert_eq!(reason, "ApiAuthFailed");
//!
//! let (reason, message) = map_http_error_to_reason(500);
//! assert_eq!(reason, "ApiInternalError");
//! ```

use crate::status_reasons::{
    REASON_API_AUTH_FAILED, REASON_API_BAD_REQUEST, REASON_API_INTERNAL_ERROR,
    REASON_API_REJECTED, REASON_API_UNREACHABLE, REASON_GATEWAY_ERROR, REASON_NOT_FOUND,
    REASON_UNEXPECTED_STATUS,
};

/// Map HTTP status code to reason and message.
///
/// # HTTP Code Mapping
///
/// | HTTP Code | Reason | Meaning |
/// |-----------|--------|---------|
/// | 400 | `ApiBadRequest` | Invalid request format |
/// | 401 | `ApiAuthFailed` | Authentication required |
/// | 403 | `ApiAuthFailed` | Insufficient permissions |
/// | 404 | `NotFound` | Resource not found |
/// | 422 | `ApiRejected` | Request data refused |
/// | 500 | `ApiInternalError` | Internal server error |
/// | 501 | `ApiInternalError` | Not implemented |
/// | 502 | `GatewayError` | Bad gateway |
/// | 503 | `GatewayError` | Service unavailable |
/// | 504 | `GatewayError` | Gateway timeout |
/// | Other | `UnexpectedStatus` | Unexpected error |
#[must_use]
pub fn map_http_error_to_reason(status_code: u16) -> (&'static str, String) {
    match status_code {
        400 => (
            REASON_API_BAD_REQUEST,
            "Invalid request to DNS API (400)".into(),
        ),
        401 => (
            REASON_API_AUTH_FAILED,
            "DNS API authentication required (401)".into(),
        ),
        403 => (
            REASON_API_AUTH_FAILED,
            "DNS API authorization failed (403)".into(),
        ),
        404 => (REASON_NOT_FOUND, "Resource not found (404)".into()),
        422 => (
            REASON_API_REJECTED,
            "DNS API rejected the request data (422)".into(),
        ),
        500 => (
            REASON_API_INTERNAL_ERROR,
            "DNS API internal error (500)".into(),
        ),
        501 => (
            REASON_API_INTERNAL_ERROR,
            "Operation not supported by DNS API (501)".into(),
        ),
        502 => (REASON_GATEWAY_ERROR, "Bad gateway reaching DNS API (502)".into()),
        503 => (REASON_GATEWAY_ERROR, "DNS API service unavailable (503)".into()),
        504 => (
            REASON_GATEWAY_ERROR,
            "Gateway timeout reaching DNS API (504)".into(),
        ),
        _ => (
            REASON_UNEXPECTED_STATUS,
            format!("Unexpected HTTP error from DNS API ({status_code})"),
        ),
    }
}

/// Map connection error to reason and message.
///
/// Use this when the HTTP client cannot establish a connection to the API,
/// before receiving any HTTP status code.
#[must_use]
pub fn map_connection_error() -> (&'static str, String) {
    (
        REASON_API_UNREACHABLE,
        "Cannot connect to DNS API (connection refused, DNS failure, or TLS error)".into(),
    )
}

/// Returns true if the status code means the credential was refused.
#[must_use]
pub fn is_auth_failure(status_code: u16) -> bool {
    matches!(status_code, 401 | 403)
}
