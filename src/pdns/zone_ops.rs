// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone HTTP API operations for PowerDNS management.
//!
//! This module contains the request helper shared by every PowerDNS call and
//! the zone-level operations: lookup, create and delete.

use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use tracing::{debug, error, info};
use url::Url;

use super::types::{CreateZoneRequest, ErrorBody, ZoneLookup};
use crate::config::{ApiKey, ServerEndpoint};
use crate::constants::API_KEY_HEADER;
use crate::dns_errors::ApiError;
use crate::http_errors::is_auth_failure;

/// Execute one request against the PowerDNS API and return the response body.
///
/// There is no retry: any transport failure or non-success status is returned
/// to the caller as an [`ApiError`].
///
/// # Arguments
/// * `client` - HTTP client
/// * `credential` - API key sent in the `X-API-Key` header
/// * `method` - HTTP method
/// * `url` - Full URL of the API resource
/// * `body` - Optional JSON body
///
/// # Errors
///
/// Returns `ApiError::ConnectionFailed` if no response was received,
/// `ApiError::AuthenticationFailed` on 401/403 and
/// `ApiError::UnexpectedStatus` on any other non-success status.
pub(crate) async fn pdns_request<T: Serialize + std::fmt::Debug>(
    client: &HttpClient,
    credential: &ApiKey,
    method: Method,
    url: &Url,
    body: Option<&T>,
) -> Result<String, ApiError> {
    info!(
        method = %method,
        url = %url,
        body = ?body,
        "HTTP API request to PowerDNS"
    );

    let mut request = client
        .request(method.clone(), url.clone())
        .header(API_KEY_HEADER, credential.expose());
    if let Some(body_data) = body {
        request = request.json(body_data);
    }

    let response = request.send().await.map_err(|e| {
        let err = ApiError::ConnectionFailed {
            endpoint: url.to_string(),
            reason: e.to_string(),
        };
        error!(
            method = %method,
            url = %url,
            reason = err.status_reason(),
            summary = %err.summary(),
            error = %e,
            "HTTP API request could not be sent"
        );
        err
    })?;

    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let err = if is_auth_failure(status.as_u16()) {
            ApiError::AuthenticationFailed {
                endpoint: url.to_string(),
                status_code: status.as_u16(),
            }
        } else {
            ApiError::UnexpectedStatus {
                method: method.to_string(),
                endpoint: url.to_string(),
                status_code: status.as_u16(),
                message: error_message(&error_text),
            }
        };
        error!(
            method = %method,
            url = %url,
            status = %status,
            reason = err.status_reason(),
            summary = %err.summary(),
            error = %error_text,
            "HTTP API request failed"
        );
        return Err(err);
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::ConnectionFailed {
            endpoint: url.to_string(),
            reason: format!("failed to read response body: {e}"),
        })?;

    info!(
        method = %method,
        url = %url,
        status = %status,
        response_len = text.len(),
        "HTTP API request successful"
    );

    Ok(text)
}

/// Extract the `error` field of a PowerDNS error body, or return the body as is.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Look up a zone by exact name.
///
/// Only a successful response whose body is an empty array means the zone is
/// absent; every error response is propagated.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is not a zone list.
pub async fn lookup_zone(
    client: &HttpClient,
    credential: &ApiKey,
    endpoint: &ServerEndpoint,
    zone_name: &str,
) -> Result<ZoneLookup, ApiError> {
    let url = endpoint.zone_lookup_url(zone_name);

    let body = pdns_request(client, credential, Method::GET, &url, None::<&()>).await?;

    let lookup = ZoneLookup::parse(&body).map_err(|e| ApiError::MalformedResponse {
        endpoint: url.to_string(),
        reason: format!("expected a JSON array of zones: {e}"),
    })?;

    debug!(
        zone = %zone_name,
        exists = lookup.exists,
        "Zone lookup completed"
    );

    Ok(lookup)
}

/// Create a zone.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn create_zone(
    client: &HttpClient,
    credential: &ApiKey,
    endpoint: &ServerEndpoint,
    request: &CreateZoneRequest,
) -> Result<(), ApiError> {
    let url = endpoint.zones_url();

    pdns_request(client, credential, Method::POST, &url, Some(request)).await?;

    Ok(())
}

/// Delete a zone by name.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn delete_zone(
    client: &HttpClient,
    credential: &ApiKey,
    endpoint: &ServerEndpoint,
    zone_name: &str,
) -> Result<(), ApiError> {
    let url = endpoint.zone_url(zone_name);

    pdns_request(client, credential, Method::DELETE, &url, None::<&()>).await?;

    Ok(())
}
