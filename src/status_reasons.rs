// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Reason codes reported alongside a failed module result.
//!
//! Reasons are programmatic identifiers in CamelCase that classify why an
//! invocation failed. They appear in the `reason` field of the JSON result:
//!
//! ```json
//! {"changed": false, "failed": true, "reason": "ApiAuthFailed", "msg": "..."}
//! ```

// ============================================================================
// Parameter Reasons
// ============================================================================

/// Module parameters failed validation before any request was made.
pub const REASON_INVALID_PARAMETERS: &str = "InvalidParameters";

// ============================================================================
// API Reasons
// ============================================================================

/// The API endpoint could not be reached (connection refused, DNS failure, TLS error).
pub const REASON_API_UNREACHABLE: &str = "ApiUnreachable";

/// The API rejected the request as malformed (HTTP 400).
pub const REASON_API_BAD_REQUEST: &str = "ApiBadRequest";

/// The API key is missing, wrong, or lacks permission (HTTP 401/403).
pub const REASON_API_AUTH_FAILED: &str = "ApiAuthFailed";

/// The addressed resource does not exist (HTTP 404).
pub const REASON_NOT_FOUND: &str = "NotFound";

/// The API understood the request but refused the data (HTTP 422).
pub const REASON_API_REJECTED: &str = "ApiRejected";

/// The API failed internally (HTTP 500/501).
pub const REASON_API_INTERNAL_ERROR: &str = "ApiInternalError";

/// A proxy in front of the API failed (HTTP 502/503/504).
pub const REASON_GATEWAY_ERROR: &str = "GatewayError";

/// Any other non-success status code.
pub const REASON_UNEXPECTED_STATUS: &str = "UnexpectedStatus";

/// A success response carried a body of an unexpected shape.
pub const REASON_MALFORMED_RESPONSE: &str = "MalformedResponse";

// ============================================================================
// Record Reasons
// ============================================================================

/// The zone a record operation targets does not exist on the provider.
pub const REASON_ZONE_NOT_FOUND: &str = "ZoneNotFound";

/// Catch-all for failures without a more specific classification.
pub const REASON_OPERATION_FAILED: &str = "OperationFailed";
