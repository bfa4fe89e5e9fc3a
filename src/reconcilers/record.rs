// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record reconciliation through a record provider.

use anyhow::{Context, Result};
use tracing::info;

use crate::providers::{build_provider, RecordProvider};
use crate::record_action::{ActionKind, RecordAction};

/// Build the provider named by the action and apply the action.
///
/// # Errors
///
/// Returns an error if the provider cannot be built or the action fails.
pub async fn reconcile_record(action: &RecordAction) -> Result<bool> {
    let provider = build_provider(action)?;
    apply_record_action(provider.as_ref(), action).await
}

/// Apply a record action with an already configured provider.
///
/// # Errors
///
/// Returns an error if the provider call fails.
pub async fn apply_record_action(
    provider: &dyn RecordProvider,
    action: &RecordAction,
) -> Result<bool> {
    info!(
        provider = provider.name(),
        action = %action.action,
        zone = %action.zone,
        record_type = %action.record_type,
        name = action.name.as_deref().unwrap_or("@"),
        "Reconciling record"
    );

    let changed = match action.action {
        ActionKind::Create => provider.create_record(action).await,
        ActionKind::Delete => provider.delete_record(action).await,
    }
    .with_context(|| {
        format!(
            "Failed to {} {} record in zone {} via {}",
            action.action,
            action.record_type,
            action.zone,
            provider.name()
        )
    })?;

    Ok(changed)
}
