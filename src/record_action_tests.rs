// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for record module parameters.

#[cfg(test)]
mod tests {
    use crate::dns_errors::ConfigError;
    use crate::record_action::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn params() -> RecordParams {
        RecordParams {
            provider_name: Some("PowerDNS".to_string()),
            action: Some(ActionKind::Create),
            domain: Some("example.com".to_string()),
            record_type: Some(RecordType::A),
            name: Some("www".to_string()),
            content: Some("192.0.2.10".to_string()),
            delegated: None,
            provider_options: BTreeMap::from([(
                "auth_token".to_string(),
                json!("secret"),
            )]),
        }
    }

    // ============================================================================
    // RecordType
    // ============================================================================

    #[test]
    fn test_record_type_parses_case_insensitively() {
        assert_eq!("a".parse::<RecordType>().unwrap(), RecordType::A);
        assert_eq!("Aaaa".parse::<RecordType>().unwrap(), RecordType::AAAA);
        assert_eq!(" txt ".parse::<RecordType>().unwrap(), RecordType::TXT);
    }

    #[test]
    fn test_record_type_rejects_unknown() {
        let err = "PTR".parse::<RecordType>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { ref name, .. } if name == "type"));
        assert!(err.to_string().contains("SRV"));
    }

    #[test]
    fn test_record_type_display_round_trips() {
        for record_type in RecordType::ALL {
            assert_eq!(record_type.to_string().parse::<RecordType>().unwrap(), record_type);
        }
    }

    #[test]
    fn test_record_type_deserializes_from_lowercase() {
        let parsed: RecordParams = serde_json::from_value(json!({"type": "cname"})).unwrap();
        assert_eq!(parsed.record_type, Some(RecordType::CNAME));
    }

    // ============================================================================
    // Validation
    // ============================================================================

    #[test]
    fn test_validate_create() {
        let action = params().validate().unwrap();

        assert_eq!(action.provider_name, "powerdns");
        assert_eq!(action.action, ActionKind::Create);
        assert_eq!(action.zone, "example.com");
        assert_eq!(action.record_type, RecordType::A);
        assert_eq!(action.name.as_deref(), Some("www"));
        assert_eq!(action.content.as_deref(), Some("192.0.2.10"));
    }

    #[test]
    fn test_validate_create_requires_content() {
        let err = RecordParams {
            content: Some("  ".to_string()),
            ..params()
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::MissingParameter {
                name: "content".to_string()
            }
        );
    }

    #[test]
    fn test_validate_delete_without_content() {
        let action = RecordParams {
            action: Some(ActionKind::Delete),
            content: None,
            name: Some(String::new()),
            ..params()
        }
        .validate()
        .unwrap();

        assert_eq!(action.content, None);
        assert_eq!(action.name, None);
    }

    #[test]
    fn test_validate_missing_required() {
        let missing = |p: RecordParams| match p.validate() {
            Err(ConfigError::MissingParameter { name }) => name,
            other => panic!("expected a missing parameter, got {other:?}"),
        };

        assert_eq!(missing(RecordParams { provider_name: None, ..params() }), "provider_name");
        assert_eq!(missing(RecordParams { action: None, ..params() }), "action");
        assert_eq!(missing(RecordParams { domain: None, ..params() }), "domain");
        assert_eq!(missing(RecordParams { record_type: None, ..params() }), "type");
    }

    #[test]
    fn test_debug_hides_provider_option_values() {
        let action = params().validate().unwrap();
        let debug = format!("{action:?}");

        assert!(debug.contains("auth_token"));
        assert!(!debug.contains("secret"));
    }

    // ============================================================================
    // Effective zone
    // ============================================================================

    #[test]
    fn test_effective_zone_without_delegation() {
        assert_eq!(effective_zone("example.com.", None).unwrap(), "example.com");
        assert_eq!(effective_zone("example.com", Some("")).unwrap(), "example.com");
    }

    #[test]
    fn test_effective_zone_relative_delegation() {
        assert_eq!(
            effective_zone("example.com", Some("sub")).unwrap(),
            "sub.example.com"
        );
    }

    #[test]
    fn test_effective_zone_absolute_delegation() {
        assert_eq!(
            effective_zone("example.com", Some("sub.example.com.")).unwrap(),
            "sub.example.com"
        );
        assert_eq!(
            effective_zone("example.com", Some("example.com")).unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_effective_zone_suffix_needs_label_boundary() {
        assert_eq!(
            effective_zone("example.com", Some("myexample.com")).unwrap(),
            "myexample.com.example.com"
        );
    }

    #[test]
    fn test_effective_zone_rejects_invalid_name() {
        assert!(matches!(
            effective_zone("example.com", Some("bad..sub")),
            Err(ConfigError::InvalidZoneName { .. })
        ));
    }
}
