// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zonectl::config::{DesiredState, ZoneConfig, ZoneParams};

pub const API_KEY: &str = "test-api-key";
pub const ZONES_PATH: &str = "/api/v1/servers/localhost/zones";

/// Validated zone configuration pointing at the mock server.
pub fn zone_config(uri: &str, zone: &str, state: DesiredState) -> ZoneConfig {
    ZoneParams {
        state: Some(state),
        api_url: Some(uri.to_string()),
        api_token: Some(API_KEY.to_string()),
        name: Some(zone.to_string()),
        ..ZoneParams::default()
    }
    .validate()
    .expect("test configuration should be valid")
}

/// Zone list entry as PowerDNS returns it from `GET /zones`.
pub fn zone_summary(zone: &str) -> Value {
    json!({
        "id": zone,
        "name": zone,
        "kind": "Master",
        "url": format!("/api/v1/servers/localhost/zones/{zone}"),
        "serial": 2025010101,
        "dnssec": false
    })
}

/// Answer the filtered lookup for `zone` with the given zone list.
pub async fn mount_lookup(server: &MockServer, zone: &str, zones: Value) {
    Mock::given(method("GET"))
        .and(path(ZONES_PATH))
        .and(query_param("zone", zone))
        .and(header("X-API-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(zones))
        .mount(server)
        .await;
}

/// Answer the zone detail request for `zone` with the given RRsets.
pub async fn mount_zone_detail(server: &MockServer, zone: &str, rrsets: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{ZONES_PATH}/{zone}")))
        .and(header("X-API-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": zone,
            "name": zone,
            "kind": "Master",
            "rrsets": rrsets
        })))
        .mount(server)
        .await;
}
