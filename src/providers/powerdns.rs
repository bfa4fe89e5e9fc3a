// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! PowerDNS record provider.
//!
//! Records are managed through RRset patches: the current RRset is read from
//! the zone, the desired record is added to or removed from it, and the result
//! is written back with a single `REPLACE` (or `DELETE` once nothing remains).

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use super::RecordProvider;
use crate::config::{ApiKey, ServerEndpoint};
use crate::constants::{
    DEFAULT_DNS_RECORD_TTL_SECS, OPTION_AUTH_TOKEN, OPTION_PDNS_SERVER, OPTION_PDNS_SERVER_ID,
    PROVIDER_POWERDNS,
};
use crate::dns_errors::{ConfigError, RecordError};
use crate::pdns::{PdnsClient, RRSet, RRSetChange, RecordEntry, ZoneDetail};
use crate::record_action::{RecordAction, RecordType};

/// Record provider backed by a PowerDNS Authoritative server.
#[derive(Debug, Clone)]
pub struct PowerDnsProvider {
    client: PdnsClient,
}

impl PowerDnsProvider {
    #[must_use]
    pub fn new(client: PdnsClient) -> Self {
        Self { client }
    }

    /// Configure the provider from `provider_options`.
    ///
    /// Recognized options: `pdns_server` (required), `auth_token` (required)
    /// and `pdns_server_id` (default `localhost`).
    ///
    /// # Errors
    ///
    /// Returns an error if a required option is missing or invalid.
    pub fn from_options(options: &BTreeMap<String, Value>) -> Result<Self> {
        let server = option_str(options, OPTION_PDNS_SERVER)?.ok_or_else(|| {
            ConfigError::MissingParameter {
                name: format!("provider_options.{OPTION_PDNS_SERVER}"),
            }
        })?;
        let token = option_str(options, OPTION_AUTH_TOKEN)?.ok_or_else(|| {
            ConfigError::MissingParameter {
                name: format!("provider_options.{OPTION_AUTH_TOKEN}"),
            }
        })?;
        let server_id = option_str(options, OPTION_PDNS_SERVER_ID)?;

        let endpoint = ServerEndpoint::new(&server, server_id.as_deref())?;
        let credential = ApiKey::new(&format!("provider_options.{OPTION_AUTH_TOKEN}"), token)?;

        Ok(Self::new(PdnsClient::new(endpoint, credential)?))
    }

    async fn load_zone(&self, zone: &str) -> Result<ZoneDetail> {
        let zone_fqdn = format!("{zone}.");
        self.client
            .get_zone(&zone_fqdn)
            .await
            .with_context(|| format!("Failed to read zone {zone_fqdn}"))?
            .ok_or_else(|| {
                RecordError::ZoneNotFound {
                    zone: zone_fqdn.clone(),
                    endpoint: self.client.endpoint().to_string(),
                }
                .into()
            })
    }

    async fn apply(&self, zone: &str, change: RRSetChange) -> Result<()> {
        let zone_fqdn = format!("{zone}.");
        self.client
            .patch_rrsets(&zone_fqdn, vec![change])
            .await
            .with_context(|| format!("Failed to update RRsets of zone {zone_fqdn}"))
    }
}

#[async_trait]
impl RecordProvider for PowerDnsProvider {
    fn name(&self) -> &'static str {
        PROVIDER_POWERDNS
    }

    async fn create_record(&self, action: &RecordAction) -> Result<bool> {
        let fqdn = record_fqdn(action.name.as_deref(), &action.zone);
        let content = action
            .content
            .as_deref()
            .map(|c| normalize_content(action.record_type, c))
            .ok_or_else(|| ConfigError::MissingParameter {
                name: "content".to_string(),
            })?;

        let zone = self.load_zone(&action.zone).await?;
        let existing = zone.find_rrset(&fqdn, action.record_type.as_str());

        let Some(change) = plan_create(existing, &fqdn, action.record_type, &content) else {
            info!(
                record = %fqdn,
                record_type = %action.record_type,
                "Record already exists with this content - no changes needed"
            );
            return Ok(false);
        };

        self.apply(&action.zone, change).await?;
        info!(
            record = %fqdn,
            record_type = %action.record_type,
            content = %content,
            "Record created"
        );
        Ok(true)
    }

    async fn delete_record(&self, action: &RecordAction) -> Result<bool> {
        let fqdn = record_fqdn(action.name.as_deref(), &action.zone);
        let content = action
            .content
            .as_deref()
            .map(|c| normalize_content(action.record_type, c));

        let zone = self.load_zone(&action.zone).await?;
        let existing = zone.find_rrset(&fqdn, action.record_type.as_str());

        let Some(change) = plan_delete(existing, &fqdn, action.record_type, content.as_deref())
        else {
            info!(
                record = %fqdn,
                record_type = %action.record_type,
                "Record does not exist - no changes needed"
            );
            return Ok(false);
        };

        self.apply(&action.zone, change).await?;
        info!(
            record = %fqdn,
            record_type = %action.record_type,
            "Record deleted"
        );
        Ok(true)
    }
}

fn option_str(options: &BTreeMap<String, Value>, key: &str) -> Result<Option<String>, ConfigError> {
    match options.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(ConfigError::InvalidParameter {
            name: format!("provider_options.{key}"),
            reason: "expected a string".to_string(),
        }),
    }
}

/// Fully qualified record name (trailing dot) inside `zone`.
///
/// An absent name or `@` addresses the zone apex; names already inside the
/// zone are kept, any other name is taken relative to the zone.
#[must_use]
pub fn record_fqdn(name: Option<&str>, zone: &str) -> String {
    let zone = zone.trim_end_matches('.');
    let name = name.map(|n| n.trim().trim_end_matches('.')).unwrap_or("");

    if name.is_empty() || name == "@" {
        return format!("{zone}.");
    }
    let inside_zone = name.eq_ignore_ascii_case(zone)
        || name
            .len()
            .checked_sub(zone.len() + 1)
            .is_some_and(|at| {
                name.as_bytes()[at] == b'.' && name[at + 1..].eq_ignore_ascii_case(zone)
            });
    if inside_zone {
        format!("{name}.")
    } else {
        format!("{name}.{zone}.")
    }
}

/// Bring record content into the form PowerDNS stores.
///
/// `TXT` content is double-quoted; `CNAME` and `NS` targets get a trailing dot.
#[must_use]
pub fn normalize_content(record_type: RecordType, content: &str) -> String {
    let content = content.trim();
    match record_type {
        RecordType::TXT => {
            let mut quoted = String::with_capacity(content.len() + 2);
            if !content.starts_with('"') {
                quoted.push('"');
            }
            quoted.push_str(content);
            if !content.ends_with('"') || content.len() == 1 {
                quoted.push('"');
            }
            quoted
        }
        RecordType::CNAME | RecordType::NS if !content.ends_with('.') => format!("{content}."),
        _ => content.to_string(),
    }
}

/// RRset change that adds `content`, or `None` if it is already present.
#[must_use]
pub fn plan_create(
    existing: Option<&RRSet>,
    fqdn: &str,
    record_type: RecordType,
    content: &str,
) -> Option<RRSetChange> {
    if existing.is_some_and(|set| set.contains(content)) {
        return None;
    }

    let mut records = existing.map(|set| set.records.clone()).unwrap_or_default();
    records.push(RecordEntry::enabled(content));
    let ttl = existing
        .and_then(|set| set.ttl)
        .unwrap_or(DEFAULT_DNS_RECORD_TTL_SECS);

    Some(RRSetChange::replace(fqdn, record_type.as_str(), ttl, records))
}

/// RRset change that removes `content` (or the whole RRset when `content` is
/// `None`), or `None` if nothing matches.
#[must_use]
pub fn plan_delete(
    existing: Option<&RRSet>,
    fqdn: &str,
    record_type: RecordType,
    content: Option<&str>,
) -> Option<RRSetChange> {
    let set = existing.filter(|set| !set.records.is_empty())?;

    let remaining: Vec<RecordEntry> = match content {
        Some(content) if !set.contains(content) => return None,
        Some(content) => set
            .records
            .iter()
            .filter(|r| r.content != content)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    if remaining.is_empty() {
        Some(RRSetChange::delete(fqdn, record_type.as_str()))
    } else {
        let ttl = set.ttl.unwrap_or(DEFAULT_DNS_RECORD_TTL_SECS);
        Some(RRSetChange::replace(
            fqdn,
            record_type.as_str(),
            ttl,
            remaining,
        ))
    }
}

#[cfg(test)]
#[path = "powerdns_tests.rs"]
mod powerdns_tests;
