// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Reconciliation of declared DNS state against a provider.
//!
//! Each reconciler runs once per invocation:
//!
//! 1. **Observe** - Read the current state from the provider
//! 2. **Compare** - Decide whether it already matches the desired state
//! 3. **Act** - Issue at most the mutation needed to converge
//! 4. **Report** - Return whether anything changed
//!
//! # Available Reconcilers
//!
//! - [`reconcile_zone`] - Ensures a zone is present or absent on a PowerDNS server
//! - [`reconcile_record`] - Creates or deletes a record through a record provider
//!
//! # Example: Using a Reconciler
//!
//! ```rust,no_run
//! use zonectl::config::ZoneParams;
//! use zonectl::pdns::PdnsClient;
//! use zonectl::reconcilers::reconcile_zone;
//!
//! async fn ensure_zone(params: ZoneParams) -> anyhow::Result<bool> {
//!     let config = params.validate()?;
//!     let client = PdnsClient::new(config.endpoint.clone(), config.credential.clone())?;
//!     reconcile_zone(&client, &config).await
//! }
//! ```

pub mod record;
pub mod zone;

pub use record::{apply_record_action, reconcile_record};
pub use zone::{reconcile_zone, run_zone_module};
