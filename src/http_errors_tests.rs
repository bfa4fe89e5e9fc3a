// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for http_errors module
//!
//! These tests verify HTTP error code mapping to failure reasons.

#[cfg(test)]
mod tests {
    use crate::http_errors::*;
    use crate::status_reasons::*;

    // ============================================================================
    // Test HTTP 4xx Error Code Mappings
    // ============================================================================

    #[test]
    fn test_map_http_400_bad_request() {
        let (reason, message) = map_http_error_to_reason(400);
        assert_eq!(reason, REASON_API_BAD_REQUEST);
        assert!(message.contains("400"));
        assert!(message.contains("Invalid request"));
    }

    #[test]
    fn test_map_http_401_unauthorized() {
        let (reason, message) = map_http_error_to_reason(401);
        assert_eq!(reason, REASON_API_AUTH_FAILED);
        assert!(message.contains("401"));
        assert!(message.contains("authentication"));
    }

    #[test]
    fn test_map_http_403_forbidden() {
        let (reason, message) = map_http_error_to_reason(403);
        assert_eq!(reason, REASON_API_AUTH_FAILED);
        assert!(message.contains("403"));
        assert!(message.contains("authorization"));
    }

    #[test]
    fn test_map_http_404_not_found() {
        let (reason, message) = map_http_error_to_reason(404);
        assert_eq!(reason, REASON_NOT_FOUND);
        assert!(message.contains("404"));
    }

    #[test]
    fn test_map_http_422_unprocessable() {
        let (reason, message) = map_http_error_to_reason(422);
        assert_eq!(reason, REASON_API_REJECTED);
        assert!(message.contains("422"));
        assert!(message.contains("rejected"));
    }

    // ============================================================================
    // Test HTTP 5xx Error Code Mappings
    // ============================================================================

    #[test]
    fn test_map_http_500_internal_error() {
        let (reason, message) = map_http_error_to_reason(500);
        assert_eq!(reason, REASON_API_INTERNAL_ERROR);
        assert!(message.contains("500"));
    }

    #[test]
    fn test_map_http_501_not_implemented() {
        let (reason, message) = map_http_error_to_reason(501);
        assert_eq!(reason, REASON_API_INTERNAL_ERROR);
        assert!(message.contains("not supported"));
    }

    #[test]
    fn test_map_http_gateway_errors() {
        for code in [502, 503, 504] {
            let (reason, message) = map_http_error_to_reason(code);
            assert_eq!(reason, REASON_GATEWAY_ERROR, "code {code}");
            assert!(message.contains(&code.to_string()));
        }
    }

    // ============================================================================
    // Test Unknown Codes and Helpers
    // ============================================================================

    #[test]
    fn test_map_unknown_status_code() {
        let (reason, message) = map_http_error_to_reason(418);
        assert_eq!(reason, REASON_UNEXPECTED_STATUS);
        assert!(message.contains("418"));
    }

    #[test]
    fn test_map_connection_error() {
        let (reason, message) = map_connection_error();
        assert_eq!(reason, REASON_API_UNREACHABLE);
        assert!(!message.is_empty());
    }

    #[test]
    fn test_is_auth_failure() {
        assert!(is_auth_failure(401));
        assert!(is_auth_failure(403));
        assert!(!is_auth_failure(400));
        assert!(!is_auth_failure(404));
        assert!(!is_auth_failure(500));
    }
}
