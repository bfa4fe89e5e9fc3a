// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command line interface of the `zonectl` binary.
//!
//! Every module can be invoked either with flags (and environment variable
//! fallbacks) or through a task file:
//!
//! ```bash
//! zonectl zone --api-url http://dns.example:8081 --api-token "$TOKEN" --name example.com
//! zonectl record --provider-name powerdns --action create --domain example.com \
//!     --type A --name www --content 192.0.2.10 \
//!     --option pdns_server=http://dns.example:8081 --option auth_token="$TOKEN"
//! zonectl apply task.yaml
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::debug;

use crate::config::{DesiredState, Task, ZoneParams};
use crate::reconcilers::{reconcile_record, run_zone_module};
use crate::record_action::{ActionKind, RecordParams, RecordType};

#[derive(Debug, Parser)]
#[command(name = "zonectl")]
#[command(about = "Idempotent DNS zone and record management", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ensure a zone is present on, or absent from, a PowerDNS server
    Zone(ZoneArgs),

    /// Create or delete a DNS record through a DNS provider
    Record(RecordArgs),

    /// Run the module described by a YAML or JSON task file
    Apply {
        /// Path to the task file
        file: PathBuf,
    },

    /// Print a shell completion script to stdout
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Zone module flags.
///
/// Required values are checked by [`ZoneParams::validate`], not by the parser.
#[derive(Debug, Args)]
pub struct ZoneArgs {
    /// Desired zone state
    #[arg(long, value_enum, default_value_t = DesiredState::Present)]
    pub state: DesiredState,

    /// PowerDNS authoritative server API URL
    #[arg(long, env = "PDNS_API_URL")]
    pub api_url: Option<String>,

    /// PowerDNS API key
    #[arg(long, env = "PDNS_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Name of the zone to manage (e.g. example.com.)
    #[arg(long)]
    pub name: Option<String>,

    /// PowerDNS server identifier
    #[arg(long, env = "PDNS_SERVER_ID")]
    pub server_id: Option<String>,

    /// Nameserver to seed a newly created zone with (repeatable)
    #[arg(long = "nameserver")]
    pub nameservers: Vec<String>,
}

impl From<ZoneArgs> for ZoneParams {
    fn from(args: ZoneArgs) -> Self {
        Self {
            state: Some(args.state),
            api_url: args.api_url,
            api_token: args.api_token,
            name: args.name,
            server_id: args.server_id,
            nameservers: args.nameservers,
        }
    }
}

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Name of the DNS provider (e.g. powerdns)
    #[arg(long)]
    pub provider_name: Option<String>,

    /// Action to perform
    #[arg(long, value_enum)]
    pub action: Option<ActionKind>,

    /// Top level domain name
    #[arg(long)]
    pub domain: Option<String>,

    /// Type of record to manage
    #[arg(long = "type", value_enum, ignore_case = true)]
    pub record_type: Option<RecordType>,

    /// Name of the entry (defaults to the zone apex)
    #[arg(long)]
    pub name: Option<String>,

    /// Contents of the record, e.g. an IP address for an A record
    #[arg(long)]
    pub content: Option<String>,

    /// Subdomain whose records are managed, if delegated
    #[arg(long)]
    pub delegated: Option<String>,

    /// Provider specific option as key=value (repeatable)
    #[arg(long = "option", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,
}

impl From<RecordArgs> for RecordParams {
    fn from(args: RecordArgs) -> Self {
        Self {
            provider_name: args.provider_name,
            action: args.action,
            domain: args.domain,
            record_type: args.record_type,
            name: args.name,
            content: args.content,
            delegated: args.delegated,
            provider_options: args
                .options
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}

/// Parse a `key=value` provider option.
///
/// # Errors
///
/// Returns a message if there is no `=` or the key is empty.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid option '{s}': expected key=value"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid option '{s}': empty key"));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Commands {
    /// Turn a module command into the task it describes.
    ///
    /// Returns `Ok(None)` for commands that do not run a module.
    ///
    /// # Errors
    ///
    /// Returns an error if a task file cannot be loaded.
    pub fn into_task(self) -> Result<Option<Task>> {
        match self {
            Self::Zone(args) => Ok(Some(Task::PdnsZone(args.into()))),
            Self::Record(args) => Ok(Some(Task::DnsProvider(args.into()))),
            Self::Apply { file } => Task::load(&file).map(Some),
            Self::Completions { .. } => Ok(None),
        }
    }
}

/// Validate a task's parameters and run its module.
///
/// # Errors
///
/// Returns an error if validation fails or the module fails.
pub async fn run_task(task: Task) -> Result<bool> {
    match task {
        Task::PdnsZone(params) => {
            let config = params.validate()?;
            debug!(config = ?config, "Zone module configuration");
            run_zone_module(&config).await
        }
        Task::DnsProvider(params) => {
            let action = params.validate()?;
            debug!(action = ?action, "Record module configuration");
            reconcile_record(&action).await
        }
    }
}
