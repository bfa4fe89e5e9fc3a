// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Request and response models of the PowerDNS Authoritative HTTP API.

use serde::{Deserialize, Serialize};

use crate::constants::{ZONE_KIND_MASTER, ZONE_TYPE};

/// One entry of the zone list returned by `GET /zones`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZoneSummary {
    /// Opaque zone id (usually the canonical name)
    #[serde(default)]
    pub id: Option<String>,
    /// Canonical zone name
    pub name: String,
    /// Zone kind (`Native`, `Master`, `Slave`, ...)
    #[serde(default)]
    pub kind: Option<String>,
}

/// Result of a filtered zone lookup (`GET /zones?zone=<name>`).
///
/// The server answers a filtered lookup with a JSON array: empty when the zone
/// is unknown, one entry when it exists. Anything that is not an array of zone
/// objects is a malformed response, never "absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLookup {
    /// True iff the server listed at least one zone
    pub exists: bool,
    /// Zones returned by the server
    pub zones: Vec<ZoneSummary>,
}

impl ZoneLookup {
    /// Parse the body of a successful lookup response.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the body is not an array of zone objects.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let zones: Vec<ZoneSummary> = serde_json::from_str(body)?;
        Ok(Self {
            exists: !zones.is_empty(),
            zones,
        })
    }
}

/// Body of `POST /zones`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateZoneRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<String>,
}

impl CreateZoneRequest {
    /// A primary (`Master`) zone, optionally seeded with nameservers.
    #[must_use]
    pub fn master(zone: &str, nameservers: &[String]) -> Self {
        Self {
            name: zone.to_string(),
            zone_type: ZONE_TYPE.to_string(),
            kind: ZONE_KIND_MASTER.to_string(),
            nameservers: nameservers.to_vec(),
        }
    }
}

/// A zone as returned by `GET /zones/<name>`, limited to what record
/// operations need.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZoneDetail {
    pub name: String,
    #[serde(default)]
    pub rrsets: Vec<RRSet>,
}

impl ZoneDetail {
    /// Find the RRset for `name` and `rtype`; names compare case-insensitively.
    #[must_use]
    pub fn find_rrset(&self, name: &str, rtype: &str) -> Option<&RRSet> {
        self.rrsets
            .iter()
            .find(|set| set.rtype == rtype && set.name.eq_ignore_ascii_case(name))
    }
}

/// A resource record set: every record sharing one name and type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RRSet {
    pub name: String,
    #[serde(rename = "type")]
    pub rtype: String,
    #[serde(default)]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

impl RRSet {
    /// True if a record with exactly this content is present.
    #[must_use]
    pub fn contains(&self, content: &str) -> bool {
        self.records.iter().any(|r| r.content == content)
    }
}

/// A single record inside an RRset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub content: String,
    #[serde(default)]
    pub disabled: bool,
}

impl RecordEntry {
    #[must_use]
    pub fn enabled(content: &str) -> Self {
        Self {
            content: content.to_string(),
            disabled: false,
        }
    }
}

/// How an RRset change applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    /// Replace the whole RRset with the given records
    Replace,
    /// Remove the whole RRset
    Delete,
}

/// One RRset change of a `PATCH /zones/<name>` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RRSetChange {
    pub name: String,
    #[serde(rename = "type")]
    pub rtype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    pub changetype: ChangeType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<RecordEntry>,
}

impl RRSetChange {
    #[must_use]
    pub fn replace(name: &str, rtype: &str, ttl: u32, records: Vec<RecordEntry>) -> Self {
        Self {
            name: name.to_string(),
            rtype: rtype.to_string(),
            ttl: Some(ttl),
            changetype: ChangeType::Replace,
            records,
        }
    }

    #[must_use]
    pub fn delete(name: &str, rtype: &str) -> Self {
        Self {
            name: name.to_string(),
            rtype: rtype.to_string(),
            ttl: None,
            changetype: ChangeType::Delete,
            records: Vec::new(),
        }
    }
}

/// Body of `PATCH /zones/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RRSetPatch {
    pub rrsets: Vec<RRSetChange>,
}

/// Error body PowerDNS returns with non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
