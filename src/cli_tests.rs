// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for command line parsing.

#[cfg(test)]
mod tests {
    use crate::cli::*;
    use crate::config::{DesiredState, Task};
    use crate::dns_errors::ConfigError;
    use crate::output::ModuleResult;
    use crate::status_reasons::REASON_INVALID_PARAMETERS;
    use crate::record_action::{ActionKind, RecordType};
    use clap::Parser;
    use serde_json::json;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("pdns_server=http://dns:8081").unwrap(),
            ("pdns_server".to_string(), "http://dns:8081".to_string())
        );
        // only the first '=' separates key and value
        assert_eq!(
            parse_key_value("auth_token=abc=def").unwrap(),
            ("auth_token".to_string(), "abc=def".to_string())
        );
        assert!(parse_key_value("no-separator").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_zone_command() {
        let cli = Cli::try_parse_from([
            "zonectl",
            "zone",
            "--state",
            "absent",
            "--api-url",
            "http://dns:8081",
            "--api-token",
            "secret",
            "--name",
            "example.com",
            "--nameserver",
            "ns1.example.net",
            "--nameserver",
            "ns2.example.net",
        ])
        .unwrap();

        let Some(Task::PdnsZone(params)) = cli.command.into_task().unwrap() else {
            panic!("expected a zone task");
        };
        assert_eq!(params.state, Some(DesiredState::Absent));
        assert_eq!(params.api_url.as_deref(), Some("http://dns:8081"));
        assert_eq!(params.nameservers.len(), 2);
    }

    #[test]
    fn test_zone_command_defaults_to_present() {
        let cli = Cli::try_parse_from([
            "zonectl",
            "zone",
            "--api-url",
            "http://dns:8081",
            "--api-token",
            "secret",
            "--name",
            "example.com",
        ])
        .unwrap();

        let Commands::Zone(args) = cli.command else {
            panic!("expected the zone command");
        };
        assert_eq!(args.state, DesiredState::Present);
    }

    #[test]
    fn test_record_command() {
        let cli = Cli::try_parse_from([
            "zonectl",
            "record",
            "--provider-name",
            "powerdns",
            "--action",
            "create",
            "--domain",
            "example.com",
            "--type",
            "txt",
            "--name",
            "_acme-challenge",
            "--content",
            "token",
            "--option",
            "pdns_server=http://dns:8081",
            "--option",
            "auth_token=secret",
        ])
        .unwrap();

        let Some(Task::DnsProvider(params)) = cli.command.into_task().unwrap() else {
            panic!("expected a record task");
        };
        assert_eq!(params.action, Some(ActionKind::Create));
        assert_eq!(params.record_type, Some(RecordType::TXT));
        assert_eq!(
            params.provider_options.get("pdns_server"),
            Some(&json!("http://dns:8081"))
        );
        assert_eq!(params.provider_options.len(), 2);
    }

    #[test]
    fn test_record_command_rejects_unknown_type() {
        let result = Cli::try_parse_from([
            "zonectl",
            "record",
            "--provider-name",
            "powerdns",
            "--action",
            "create",
            "--domain",
            "example.com",
            "--type",
            "PTR",
        ]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_zone_command_without_name_fails_validation() {
        let cli = Cli::try_parse_from([
            "zonectl",
            "zone",
            "--api-url",
            "http://127.0.0.1:9",
            "--api-token",
            "secret",
        ])
        .unwrap();

        let task = cli.command.into_task().unwrap().unwrap();
        let result = run_task(task).await;

        assert_eq!(
            result.as_ref().unwrap_err().downcast_ref::<ConfigError>(),
            Some(&ConfigError::MissingParameter {
                name: "name".to_string()
            })
        );

        let outcome = ModuleResult::from(&result);
        assert!(outcome.failed);
        assert!(!outcome.changed);
        assert_eq!(outcome.reason, Some(REASON_INVALID_PARAMETERS));
        assert_eq!(
            outcome.msg.as_deref(),
            Some("Missing required parameter 'name'")
        );
    }

    #[tokio::test]
    async fn test_record_command_without_domain_fails_validation() {
        let cli = Cli::try_parse_from([
            "zonectl",
            "record",
            "--provider-name",
            "powerdns",
            "--action",
            "delete",
            "--type",
            "A",
        ])
        .unwrap();

        let task = cli.command.into_task().unwrap().unwrap();
        let outcome = ModuleResult::from(&run_task(task).await);

        assert_eq!(outcome.reason, Some(REASON_INVALID_PARAMETERS));
        assert_eq!(
            outcome.msg.as_deref(),
            Some("Missing required parameter 'domain'")
        );
    }

    #[test]
    fn test_completions_has_no_task() {
        let cli = Cli::try_parse_from(["zonectl", "completions", "bash"]).unwrap();
        assert!(cli.command.into_task().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_run_task_fails_validation_before_any_request() {
        let task =
            Task::from_yaml("module: pdns_zone\napi_url: http://127.0.0.1:9\nname: example.com\n")
                .unwrap();

        let err = run_task(task).await.unwrap_err();
        assert!(err.to_string().contains("api_token"));
    }

    #[tokio::test]
    async fn test_run_task_unsupported_provider() {
        let task = Task::from_yaml(
            "module: dns_provider\n\
             provider_name: route53\n\
             action: delete\n\
             domain: example.com\n\
             type: A\n",
        )
        .unwrap();

        let err = run_task(task).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported DNS provider 'route53'"));
    }
}
