// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # zonectl - Idempotent DNS zone and record management
//!
//! zonectl lets an operator declare desired DNS state and have it reconciled
//! against a DNS provider's HTTP API, reporting whether anything changed.
//!
//! ## Overview
//!
//! - Zones are made present or absent on a PowerDNS Authoritative server with a
//!   read-before-write existence check: one lookup, then at most one mutation.
//! - Records are created or deleted through a [`providers::RecordProvider`],
//!   selected by name and configured from provider options.
//!
//! ## Modules
//!
//! - [`config`] - Zone module parameters, validation and task files
//! - [`record_action`] - Record module parameters and the record action descriptor
//! - [`pdns`] - PowerDNS HTTP API client
//! - [`providers`] - Record providers
//! - [`reconcilers`] - Zone and record reconciliation
//! - [`cli`] - Command line interface
//! - [`output`] - Result object reported upstream
//!
//! ## Example
//!
//! ```rust,no_run
//! use zonectl::config::{DesiredState, ZoneParams};
//! use zonectl::reconcilers::run_zone_module;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ZoneParams {
//!     state: Some(DesiredState::Present),
//!     api_url: Some("http://dns.example:8081".to_string()),
//!     api_token: Some("secret".to_string()),
//!     name: Some("example.com.".to_string()),
//!     ..ZoneParams::default()
//! }
//! .validate()?;
//!
//! let changed = run_zone_module(&config).await?;
//! println!("changed: {changed}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod dns_errors;
pub mod http_errors;
pub mod output;
pub mod pdns;
pub mod providers;
pub mod reconcilers;
pub mod record_action;
pub mod status_reasons;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod http_errors_tests;
#[cfg(test)]
mod output_tests;
#[cfg(test)]
mod record_action_tests;
