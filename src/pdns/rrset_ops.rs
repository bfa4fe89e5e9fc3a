// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! RRset HTTP API operations for PowerDNS record management.

use reqwest::{Client as HttpClient, Method};
use tracing::debug;

use super::types::{RRSetChange, RRSetPatch, ZoneDetail};
use super::zone_ops::pdns_request;
use crate::config::{ApiKey, ServerEndpoint};
use crate::dns_errors::ApiError;

/// Fetch a zone with its RRsets.
///
/// Returns `Ok(None)` when the server answers 404 for the zone.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails for any other reason or the
/// body is not a zone object.
pub async fn get_zone(
    client: &HttpClient,
    credential: &ApiKey,
    endpoint: &ServerEndpoint,
    zone_name: &str,
) -> Result<Option<ZoneDetail>, ApiError> {
    let url = endpoint.zone_url(zone_name);

    let body = match pdns_request(client, credential, Method::GET, &url, None::<&()>).await {
        Ok(body) => body,
        Err(ApiError::UnexpectedStatus {
            status_code: 404, ..
        }) => {
            debug!(zone = %zone_name, "Zone does not exist");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let zone = serde_json::from_str::<ZoneDetail>(&body).map_err(|e| {
        ApiError::MalformedResponse {
            endpoint: url.to_string(),
            reason: format!("expected a zone object: {e}"),
        }
    })?;

    Ok(Some(zone))
}

/// Apply RRset changes to a zone.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn patch_rrsets(
    client: &HttpClient,
    credential: &ApiKey,
    endpoint: &ServerEndpoint,
    zone_name: &str,
    changes: Vec<RRSetChange>,
) -> Result<(), ApiError> {
    let url = endpoint.zone_url(zone_name);
    let patch = RRSetPatch { rrsets: changes };

    pdns_request(client, credential, Method::PATCH, &url, Some(&patch)).await?;

    Ok(())
}
