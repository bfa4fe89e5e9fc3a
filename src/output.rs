// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Result object reported to the automation runtime.
//!
//! Exactly one JSON object is written to stdout per invocation:
//!
//! ```json
//! {"changed": true}
//! {"changed": false, "failed": true, "msg": "...", "reason": "ApiAuthFailed"}
//! ```

use serde::Serialize;

use crate::dns_errors::DnsError;

/// Outcome of one module invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleResult {
    pub changed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl ModuleResult {
    /// A successful invocation.
    #[must_use]
    pub fn success(changed: bool) -> Self {
        Self {
            changed,
            failed: false,
            msg: None,
            reason: None,
        }
    }

    /// A failed invocation; `msg` carries the full error chain.
    #[must_use]
    pub fn failure(err: &anyhow::Error) -> Self {
        Self {
            changed: false,
            failed: true,
            msg: Some(format!("{err:#}")),
            reason: Some(DnsError::classify(err).status_reason()),
        }
    }

    /// Serialize to a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&anyhow::Result<bool>> for ModuleResult {
    fn from(result: &anyhow::Result<bool>) -> Self {
        match result {
            Ok(changed) => Self::success(*changed),
            Err(e) => Self::failure(e),
        }
    }
}
