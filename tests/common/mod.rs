//! Shared helpers for the mock-server integration tests.

#![allow(dead_code)]

use ffrelay_client::Client;
use httpmock::MockServer;

pub const TOKEN: &str = "test-token";
pub const AUTH_HEADER: &str = "Bearer test-token";

pub fn client(server: &MockServer) -> Client {
    Client::builder()
        .token(TOKEN)
        .base_url(server.base_url())
        .build()
        .expect("client should build")
}

pub fn relay_address_json(id: u64, enabled: bool, description: &str) -> String {
    format!(
        r#"{{
            "id": {id},
            "address": "abc123",
            "domain": 1,
            "full_address": "abc123@relay.firefox.com",
            "enabled": {enabled},
            "description": "{description}",
            "generated_for": "example.com",
            "used_on": "",
            "block_list_emails": false,
            "created_at": "2025-01-01T00:00:00Z",
            "last_used_at": null,
            "num_forwarded": 10,
            "num_blocked": 0,
            "num_replied": 0,
            "num_spam": 0
        }}"#
    )
}

pub fn domain_address_json(id: u64, address: &str, enabled: bool) -> String {
    format!(
        r#"{{
            "id": {id},
            "mask_type": "custom",
            "address": "{address}",
            "domain": 2,
            "full_address": "{address}@me.mozmail.com",
            "enabled": {enabled},
            "description": "",
            "used_on": null,
            "block_list_emails": false,
            "created_at": "2025-03-04T05:06:07.123456Z",
            "last_modified_at": "2025-03-04T05:06:07.123456Z",
            "last_used_at": null,
            "num_forwarded": 3,
            "num_blocked": 1,
            "num_level_one_trackers_blocked": 7,
            "num_replied": 0,
            "num_spam": 0
        }}"#
    )
}
