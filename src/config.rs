// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Module parameters and their validated configuration.
//!
//! Parameters arrive loosely typed (CLI flags, environment variables or a task
//! file) as [`ZoneParams`] / [`crate::record_action::RecordParams`]. They are
//! validated once, here at the boundary, into configuration structs that the
//! reconcilers trust without further checks.
//!
//! # Example
//!
//! ```rust
//! use zonectl::config::{DesiredState, ZoneParams};
//!
//! let params = ZoneParams {
//!     state: Some(DesiredState::Present),
//!     api_url: Some("http://dns.example:8081".to_string()),
//!     api_token: Some("secret".to_string()),
//!     name: Some("example.com".to_string()),
//!     ..ZoneParams::default()
//! };
//!
//! let config = params.validate().unwrap();
//! assert_eq!(config.zone, "example.com.");
//! assert_eq!(
//!     config.endpoint.zones_url().as_str(),
//!     "http://dns.example:8081/api/v1/servers/localhost/zones"
//! );
//! ```

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

use crate::constants::{DEFAULT_SERVER_ID, MAX_DNS_LABEL_LEN, MAX_DNS_NAME_LEN, PDNS_API_PATH};
use crate::dns_errors::ConfigError;
use crate::record_action::RecordParams;

/// Desired existence of a zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DesiredState {
    /// The zone must exist
    #[default]
    Present,
    /// The zone must not exist
    Absent,
}

impl fmt::Display for DesiredState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// API key for a DNS provider.
///
/// Held in memory for one invocation only. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw token, rejecting values that cannot travel in an HTTP header.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the token is empty or contains non-printable characters.
    pub fn new(param: &str, token: String) -> Result<Self, ConfigError> {
        if token.trim().is_empty() {
            return Err(ConfigError::MissingParameter {
                name: param.to_string(),
            });
        }
        if !token.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ConfigError::InvalidParameter {
                name: param.to_string(),
                reason: "token must consist of printable ASCII characters".to_string(),
            });
        }
        Ok(Self(token))
    }

    /// The raw token, for the request header only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// A PowerDNS server resource: `{api_url}/api/v1/servers/{server_id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoint {
    base: Url,
    server_id: String,
}

impl ServerEndpoint {
    /// Build the endpoint from an API URL and an optional server identifier.
    ///
    /// A trailing slash on the API URL is tolerated; query and fragment are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL does not parse, is not `http`/`https`,
    /// or the server identifier is empty or contains a `/`.
    pub fn new(api_url: &str, server_id: Option<&str>) -> Result<Self, ConfigError> {
        let api_url = api_url.trim();
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: api_url.to_string(),
            reason,
        };

        let mut base = Url::parse(api_url).map_err(|e| invalid(e.to_string()))?;
        match base.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme '{other}'"))),
        }
        if base.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
        base.set_query(None);
        base.set_fragment(None);

        let server_id = server_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SERVER_ID)
            .to_string();
        if server_id.contains('/') {
            return Err(ConfigError::InvalidParameter {
                name: "server_id".to_string(),
                reason: "must not contain '/'".to_string(),
            });
        }

        base.path_segments_mut()
            .map_err(|()| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(PDNS_API_PATH)
            .push(&server_id);

        Ok(Self { base, server_id })
    }

    /// Server identifier the endpoint addresses.
    #[must_use]
    pub fn server_id(&self) -> &str {
        &self.server_id
    }

    /// `{base}`
    #[must_use]
    pub fn server_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/zones`
    #[must_use]
    pub fn zones_url(&self) -> Url {
        self.join(&["zones"])
    }

    /// `{base}/zones?zone={zone}`
    #[must_use]
    pub fn zone_lookup_url(&self, zone: &str) -> Url {
        let mut url = self.zones_url();
        url.query_pairs_mut().append_pair("zone", zone);
        url
    }

    /// `{base}/zones/{zone}`
    #[must_use]
    pub fn zone_url(&self, zone: &str) -> Url {
        self.join(&["zones", zone])
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `base` was checked to be a base URL in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }
}

impl fmt::Display for ServerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}

/// Raw parameters of the zone module, as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoneParams {
    /// Desired zone state (default `present`)
    #[serde(default)]
    pub state: Option<DesiredState>,
    /// PowerDNS API URL
    #[serde(default)]
    pub api_url: Option<String>,
    /// PowerDNS API key
    #[serde(default)]
    pub api_token: Option<String>,
    /// Zone name
    #[serde(default)]
    pub name: Option<String>,
    /// Server identifier (default `localhost`)
    #[serde(default)]
    pub server_id: Option<String>,
    /// Nameservers sent on zone creation
    #[serde(default)]
    pub nameservers: Vec<String>,
}

/// Validated zone module configuration.
#[derive(Debug, Clone)]
pub struct ZoneConfig {
    pub state: DesiredState,
    /// Canonical zone name (trailing dot)
    pub zone: String,
    pub endpoint: ServerEndpoint,
    pub credential: ApiKey,
    /// Canonical nameserver names, possibly empty
    pub nameservers: Vec<String>,
}

impl ZoneParams {
    /// Validate the parameters into a [`ZoneConfig`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for the first missing or invalid parameter.
    pub fn validate(self) -> Result<ZoneConfig, ConfigError> {
        let api_url = required("api_url", self.api_url)?;
        let api_token = required("api_token", self.api_token)?;
        let name = required("name", self.name)?;

        let endpoint = ServerEndpoint::new(&api_url, self.server_id.as_deref())?;
        let credential = ApiKey::new("api_token", api_token)?;
        let zone = normalize_zone_name(&name)?;
        let nameservers = self
            .nameservers
            .iter()
            .map(|ns| {
                normalize_zone_name(ns).map_err(|e| ConfigError::InvalidParameter {
                    name: "nameservers".to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ZoneConfig {
            state: self.state.unwrap_or_default(),
            zone,
            endpoint,
            credential,
            nameservers,
        })
    }
}

/// Return the trimmed value of a required parameter.
///
/// # Errors
///
/// Returns `ConfigError::MissingParameter` if the value is absent or blank.
pub fn required(name: &str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingParameter {
            name: name.to_string(),
        })
}

/// Validate a domain name and return it in canonical form (trailing dot).
///
/// Labels may contain ASCII letters, digits, `-` and `_`; the root zone is refused.
///
/// # Errors
///
/// Returns `ConfigError::InvalidZoneName` describing the first violation.
pub fn normalize_zone_name(name: &str) -> Result<String, ConfigError> {
    let trimmed = name.trim();
    let invalid = |reason: &str| ConfigError::InvalidZoneName {
        zone: name.to_string(),
        reason: reason.to_string(),
    };

    let bare = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if bare.is_empty() {
        return Err(invalid("name must not be empty or the root zone"));
    }
    if bare.len() > MAX_DNS_NAME_LEN {
        return Err(invalid("name exceeds 253 characters"));
    }
    for label in bare.split('.') {
        if label.is_empty() {
            return Err(invalid("name contains an empty label"));
        }
        if label.len() > MAX_DNS_LABEL_LEN {
            return Err(invalid("label exceeds 63 characters"));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid("label contains characters other than letters, digits, '-' or '_'"));
        }
    }

    Ok(format!("{bare}."))
}

/// A task file: one module invocation with its parameters.
///
/// ```yaml
/// module: pdns_zone
/// api_url: http://dns.example:8081
/// api_token: secret
/// name: example.com
/// state: present
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "module", rename_all = "snake_case")]
pub enum Task {
    /// Zone reconciliation on a PowerDNS server
    PdnsZone(ZoneParams),
    /// Record action on a DNS provider
    #[serde(alias = "dns_client")]
    DnsProvider(RecordParams),
}

impl Task {
    /// Parse a task from YAML text (JSON is accepted as well).
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid task.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse task file")
    }

    /// Read and parse a task file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid task.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read task file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid task file {}", path.display()))
    }
}
