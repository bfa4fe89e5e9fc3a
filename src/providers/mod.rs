// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! DNS record providers.
//!
//! A provider executes a validated [`RecordAction`] against one DNS service.
//! Providers are selected by the action's `provider_name` and configured from
//! its `provider_options`.

pub mod powerdns;

pub use powerdns::PowerDnsProvider;

use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

use crate::constants::PROVIDER_POWERDNS;
use crate::dns_errors::ConfigError;
use crate::record_action::RecordAction;

/// A DNS service able to create and delete records.
///
/// Both operations are idempotent and return whether the provider state changed.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Provider name as used in `provider_name`.
    fn name(&self) -> &'static str;

    /// Ensure the record described by `action` exists.
    async fn create_record(&self, action: &RecordAction) -> Result<bool>;

    /// Ensure the record described by `action` does not exist.
    ///
    /// Without content, every record of the name and type is removed.
    async fn delete_record(&self, action: &RecordAction) -> Result<bool>;
}

/// Names of all built-in providers.
pub const SUPPORTED_PROVIDERS: &[&str] = &[PROVIDER_POWERDNS];

/// Build the provider named by the action, configured from its options.
///
/// # Errors
///
/// Returns `ConfigError::UnsupportedProvider` for unknown names, or the
/// provider's own configuration error.
pub fn build_provider(action: &RecordAction) -> Result<Box<dyn RecordProvider>> {
    match action.provider_name.as_str() {
        PROVIDER_POWERDNS => Ok(Box::new(PowerDnsProvider::from_options(
            &action.provider_options,
        )?)),
        other => {
            error!(
                provider = other,
                supported = ?SUPPORTED_PROVIDERS,
                "Unknown DNS provider"
            );
            Err(ConfigError::UnsupportedProvider {
                provider: other.to_string(),
            }
            .into())
        }
    }
}
