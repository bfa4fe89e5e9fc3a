// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the module result object.

#[cfg(test)]
mod tests {
    use crate::dns_errors::{ApiError, ConfigError};
    use crate::output::*;
    use crate::status_reasons::{REASON_API_AUTH_FAILED, REASON_INVALID_PARAMETERS};
    use anyhow::Context;
    use serde_json::json;

    #[test]
    fn test_success_serializes_changed_only() {
        let value: serde_json::Value =
            serde_json::from_str(&ModuleResult::success(true).to_json().unwrap()).unwrap();
        assert_eq!(value, json!({"changed": true}));

        let value: serde_json::Value =
            serde_json::from_str(&ModuleResult::success(false).to_json().unwrap()).unwrap();
        assert_eq!(value, json!({"changed": false}));
    }

    #[test]
    fn test_failure_carries_chain_and_reason() {
        let err = Err::<(), _>(ApiError::AuthenticationFailed {
            endpoint: "http://dns".to_string(),
            status_code: 401,
        })
        .context("Failed to check whether zone example.com. exists")
        .unwrap_err();

        let result = ModuleResult::failure(&err);
        assert!(result.failed);
        assert!(!result.changed);
        assert_eq!(result.reason, Some(REASON_API_AUTH_FAILED));

        let msg = result.msg.as_deref().unwrap();
        assert!(msg.starts_with("Failed to check whether zone example.com. exists: "));
        assert!(msg.contains("HTTP 401"));
    }

    #[test]
    fn test_failure_json_shape() {
        let result: anyhow::Result<bool> = Err(ConfigError::MissingParameter {
            name: "name".to_string(),
        }
        .into());

        let value: serde_json::Value =
            serde_json::from_str(&ModuleResult::from(&result).to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "changed": false,
                "failed": true,
                "msg": "Missing required parameter 'name'",
                "reason": REASON_INVALID_PARAMETERS,
            })
        );
    }

    #[test]
    fn test_from_ok_result() {
        let result: anyhow::Result<bool> = Ok(true);
        assert_eq!(ModuleResult::from(&result), ModuleResult::success(true));
    }
}
