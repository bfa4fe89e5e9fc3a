// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone reconciliation on a PowerDNS server.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{DesiredState, ZoneConfig};
use crate::pdns::{CreateZoneRequest, PdnsClient};

/// Converge the existence of one zone to the configured desired state.
///
/// Issues exactly one lookup, followed by at most one create or delete call.
/// There is no protection against another actor changing the zone between the
/// lookup and the mutation.
///
/// # Returns
///
/// * `Ok(true)` - The zone was created or deleted
/// * `Ok(false)` - The zone was already in the desired state
///
/// # Errors
///
/// Returns an error if the lookup or the mutating call fails. A failed lookup
/// is never treated as "zone absent".
pub async fn reconcile_zone(client: &PdnsClient, config: &ZoneConfig) -> Result<bool> {
    let zone = config.zone.as_str();

    info!(
        zone = %zone,
        state = %config.state,
        server = %client.endpoint(),
        "Reconciling zone"
    );

    let exists = client
        .zone_exists(zone)
        .await
        .with_context(|| format!("Failed to check whether zone {zone} exists"))?;

    debug!(zone = %zone, exists = exists, "Observed zone state");

    match (config.state, exists) {
        (DesiredState::Present, true) | (DesiredState::Absent, false) => {
            info!(
                zone = %zone,
                state = %config.state,
                "Zone already in desired state - no changes needed"
            );
            Ok(false)
        }
        (DesiredState::Present, false) => {
            let request = CreateZoneRequest::master(zone, &config.nameservers);
            client
                .create_zone(&request)
                .await
                .with_context(|| format!("Failed to create zone {zone}"))?;
            info!(zone = %zone, kind = %request.kind, "Zone created");
            Ok(true)
        }
        (DesiredState::Absent, true) => {
            client
                .delete_zone(zone)
                .await
                .with_context(|| format!("Failed to delete zone {zone}"))?;
            info!(zone = %zone, "Zone deleted");
            Ok(true)
        }
    }
}

/// Build a client from the configuration and reconcile the zone.
///
/// # Errors
///
/// Returns an error if the client cannot be built or reconciliation fails.
pub async fn run_zone_module(config: &ZoneConfig) -> Result<bool> {
    let client = PdnsClient::new(config.endpoint.clone(), config.credential.clone())?;
    reconcile_zone(&client, config).await
}
