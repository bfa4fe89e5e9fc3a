// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record module parameters and the normalized record action descriptor.
//!
//! The record module accepts a flat parameter set (provider, action, domain,
//! record type/name/content, delegated subdomain and provider options) and
//! turns it into a [`RecordAction`] that any [`crate::providers::RecordProvider`]
//! can execute.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::config::required;
use crate::dns_errors::ConfigError;

/// Record types the record module manages.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(try_from = "String")]
#[value(rename_all = "UPPER")]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    SOA,
    TXT,
    SRV,
}

impl RecordType {
    /// All supported record types, in presentation order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::AAAA,
        Self::CNAME,
        Self::MX,
        Self::NS,
        Self::SOA,
        Self::TXT,
        Self::SRV,
    ];

    /// Presentation-format type mnemonic.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AAAA => "AAAA",
            Self::CNAME => "CNAME",
            Self::MX => "MX",
            Self::NS => "NS",
            Self::SOA => "SOA",
            Self::TXT => "TXT",
            Self::SRV => "SRV",
        }
    }
}

impl TryFrom<String> for RecordType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| ConfigError::InvalidParameter {
                name: "type".to_string(),
                reason: format!(
                    "'{s}' is not one of {}",
                    Self::ALL.map(Self::as_str).join(", ")
                ),
            })
    }
}

/// What to do with the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Create,
    Delete,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Raw parameters of the record module, as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordParams {
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub action: Option<ActionKind>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default, rename = "type")]
    pub record_type: Option<RecordType>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Subdomain whose records are managed instead of `domain`'s
    #[serde(default)]
    pub delegated: Option<String>,
    /// Provider specific options such as server URI and credentials
    #[serde(default)]
    pub provider_options: BTreeMap<String, Value>,
}

/// A validated, provider-neutral record action.
#[derive(Clone)]
pub struct RecordAction {
    pub provider_name: String,
    pub action: ActionKind,
    /// Effective zone without trailing dot (`domain`, or `delegated.domain`)
    pub zone: String,
    pub record_type: RecordType,
    /// Record name as given; `None` addresses the zone apex
    pub name: Option<String>,
    pub content: Option<String>,
    pub provider_options: BTreeMap<String, Value>,
}

// provider options routinely hold credentials
impl fmt::Debug for RecordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordAction")
            .field("provider_name", &self.provider_name)
            .field("action", &self.action)
            .field("zone", &self.zone)
            .field("record_type", &self.record_type)
            .field("name", &self.name)
            .field("content", &self.content)
            .field(
                "provider_options",
                &self.provider_options.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl RecordParams {
    /// Validate the parameters into a [`RecordAction`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for the first missing or invalid parameter.
    pub fn validate(self) -> Result<RecordAction, ConfigError> {
        let provider_name = required("provider_name", self.provider_name)?.to_ascii_lowercase();
        let action = self.action.ok_or_else(|| ConfigError::MissingParameter {
            name: "action".to_string(),
        })?;
        let domain = required("domain", self.domain)?;
        let record_type = self.record_type.ok_or_else(|| ConfigError::MissingParameter {
            name: "type".to_string(),
        })?;

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let content = self
            .content
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if action == ActionKind::Create && content.is_none() {
            return Err(ConfigError::MissingParameter {
                name: "content".to_string(),
            });
        }

        let zone = effective_zone(&domain, self.delegated.as_deref())?;

        Ok(RecordAction {
            provider_name,
            action,
            zone,
            record_type,
            name,
            content,
            provider_options: self.provider_options,
        })
    }
}

/// Resolve the zone a record action applies to.
///
/// With a delegated subdomain the zone becomes `<delegated>.<domain>`; a
/// delegated name already ending in `domain` is made relative first, so both
/// `sub` and `sub.example.com` resolve to `sub.example.com`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidZoneName` if the resulting zone is not a valid name.
pub fn effective_zone(domain: &str, delegated: Option<&str>) -> Result<String, ConfigError> {
    let domain = domain.trim().trim_end_matches('.');
    let zone = match delegated.map(|d| d.trim().trim_end_matches('.')) {
        Some(sub) if !sub.is_empty() => {
            let relative = match sub.strip_suffix(domain) {
                Some(rest) if rest.is_empty() || rest.ends_with('.') => rest.trim_end_matches('.'),
                _ => sub,
            };
            if relative.is_empty() {
                domain.to_string()
            } else {
                format!("{relative}.{domain}")
            }
        }
        _ => domain.to_string(),
    };

    let canonical = crate::config::normalize_zone_name(&zone)?;
    Ok(canonical.trim_end_matches('.').to_string())
}
