// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! PowerDNS management via the Authoritative Server HTTP API.
//!
//! This module provides functionality for managing one PowerDNS server
//! resource (`{api_url}/api/v1/servers/{server_id}`). It handles:
//!
//! - Looking up zones by exact name
//! - Creating and deleting zones
//! - Reading a zone's RRsets and patching them
//!
//! # Example
//!
//! ```rust,no_run
//! use zonectl::config::{ApiKey, ServerEndpoint};
//! use zonectl::pdns::PdnsClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let endpoint = ServerEndpoint::new("http://dns.example:8081", None)?;
//! let credential = ApiKey::new("api_token", "secret".to_string())?;
//! let client = PdnsClient::new(endpoint, credential)?;
//!
//! let lookup = client.lookup_zone("example.com.").await?;
//! println!("exists: {}", lookup.exists);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod rrset_ops;
pub mod types;
pub mod zone_ops;

pub use types::{
    ChangeType, CreateZoneRequest, RRSet, RRSetChange, RRSetPatch, RecordEntry, ZoneDetail,
    ZoneLookup, ZoneSummary,
};

use anyhow::{Context, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;

use crate::config::{ApiKey, ServerEndpoint};
use crate::constants::USER_AGENT;
use crate::dns_errors::ApiError;

/// Client for one PowerDNS server resource.
///
/// Holds the HTTP client, the server endpoint and the API key for the
/// lifetime of one invocation.
#[derive(Debug, Clone)]
pub struct PdnsClient {
    /// HTTP client for API requests
    client: Arc<HttpClient>,
    /// Server resource all requests are addressed to
    endpoint: ServerEndpoint,
    /// API key sent with every request
    credential: ApiKey,
}

impl PdnsClient {
    /// Create a new `PdnsClient`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(endpoint: ServerEndpoint, credential: ApiKey) -> Result<Self> {
        let client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client: Arc::new(client),
            endpoint,
            credential,
        })
    }

    /// Server resource this client addresses.
    #[must_use]
    pub fn endpoint(&self) -> &ServerEndpoint {
        &self.endpoint
    }

    // ===== Zone management methods =====

    /// Look up a zone by exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a zone list.
    pub async fn lookup_zone(&self, zone_name: &str) -> Result<ZoneLookup, ApiError> {
        zone_ops::lookup_zone(&self.client, &self.credential, &self.endpoint, zone_name).await
    }

    /// Check if a zone exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the existence cannot be determined.
    pub async fn zone_exists(&self, zone_name: &str) -> Result<bool, ApiError> {
        Ok(self.lookup_zone(zone_name).await?.exists)
    }

    /// Create a zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_zone(&self, request: &CreateZoneRequest) -> Result<(), ApiError> {
        zone_ops::create_zone(&self.client, &self.credential, &self.endpoint, request).await
    }

    /// Delete a zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_zone(&self, zone_name: &str) -> Result<(), ApiError> {
        zone_ops::delete_zone(&self.client, &self.credential, &self.endpoint, zone_name).await
    }

    // ===== RRset management methods =====

    /// Fetch a zone with its RRsets, or `None` if the zone does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a zone.
    pub async fn get_zone(&self, zone_name: &str) -> Result<Option<ZoneDetail>, ApiError> {
        rrset_ops::get_zone(&self.client, &self.credential, &self.endpoint, zone_name).await
    }

    /// Apply RRset changes to a zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn patch_rrsets(
        &self,
        zone_name: &str,
        changes: Vec<RRSetChange>,
    ) -> Result<(), ApiError> {
        rrset_ops::patch_rrsets(
            &self.client,
            &self.credential,
            &self.endpoint,
            zone_name,
            changes,
        )
        .await
    }
}
