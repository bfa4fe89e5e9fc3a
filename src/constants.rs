// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for zonectl.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// PowerDNS API Constants
// ============================================================================

/// Path prefix of the PowerDNS server resources, relative to the API URL
pub const PDNS_API_PATH: [&str; 3] = ["api", "v1", "servers"];

/// Server identifier used when none is configured
pub const DEFAULT_SERVER_ID: &str = "localhost";

/// Header carrying the PowerDNS API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Value of the `type` field on zone creation
pub const ZONE_TYPE: &str = "Zone";

/// Value of the `kind` field on zone creation
pub const ZONE_KIND_MASTER: &str = "Master";

/// User agent sent on every API request
pub const USER_AGENT: &str = concat!("zonectl/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// DNS Record Constants
// ============================================================================

/// TTL applied to a new RRset when the zone holds none for the name and type
pub const DEFAULT_DNS_RECORD_TTL_SECS: u32 = 3600;

/// Maximum length of a single DNS label (RFC 1035)
pub const MAX_DNS_LABEL_LEN: usize = 63;

/// Maximum length of a domain name in presentation format, without the trailing dot
pub const MAX_DNS_NAME_LEN: usize = 253;

// ============================================================================
// Provider Constants
// ============================================================================

/// Provider name of the built-in PowerDNS record provider
pub const PROVIDER_POWERDNS: &str = "powerdns";

/// PowerDNS provider option: API URL of the authoritative server
pub const OPTION_PDNS_SERVER: &str = "pdns_server";

/// PowerDNS provider option: API key
pub const OPTION_AUTH_TOKEN: &str = "auth_token";

/// PowerDNS provider option: server identifier
pub const OPTION_PDNS_SERVER_ID: &str = "pdns_server_id";

// ============================================================================
// Logging Constants
// ============================================================================

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "RUST_LOG_FORMAT";

/// Log level used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";
