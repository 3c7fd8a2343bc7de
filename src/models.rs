//! Records exchanged with the Relay API.
//!
//! Field names match the service's snake_case JSON keys. Fields the service
//! only sends for some accounts are `#[serde(default)]`.

use crate::BounceStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account summary for the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub server_storage: bool,
    #[serde(default)]
    pub store_phone_log: bool,
    #[serde(default)]
    pub subdomain: Option<String>,
    pub has_premium: bool,
    pub has_phone: bool,
    #[serde(default)]
    pub has_vpn: bool,
    #[serde(default)]
    pub has_megabundle: bool,
    pub onboarding_state: u32,
    #[serde(default)]
    pub onboarding_free_state: u32,
    #[serde(default)]
    pub date_phone_registered: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_subscribed: Option<DateTime<Utc>>,
    pub avatar: String,
    #[serde(default)]
    pub next_email_try: Option<DateTime<Utc>>,
    /// Sent as `[paused, type]`.
    pub bounce_status: BounceStatus,
    #[serde(default)]
    pub api_token: Option<String>,
    pub emails_blocked: u64,
    pub emails_forwarded: u64,
    pub emails_replied: u64,
    pub level_one_trackers_blocked: u64,
    pub remove_level_one_email_trackers: bool,
    #[serde(default)]
    pub total_masks: Option<u64>,
    pub at_mask_limit: bool,
    #[serde(default)]
    pub metrics_enabled: bool,
}

/// A random `@mozmail.com` (or `@relay.firefox.com`) email mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayAddress {
    pub id: u64,
    #[serde(default)]
    pub mask_type: String,
    /// Local part of the mask.
    pub address: String,
    pub domain: u32,
    pub full_address: String,
    pub enabled: bool,
    pub description: String,
    pub generated_for: String,
    pub used_on: Option<String>,
    pub block_list_emails: bool,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified_at: Option<DateTime<Utc>>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub num_forwarded: u64,
    pub num_blocked: u64,
    #[serde(default)]
    pub num_level_one_trackers_blocked: u64,
    pub num_replied: u64,
    pub num_spam: u64,
}

/// A mask on the user's custom subdomain, e.g. `shop@me.mozmail.com`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAddress {
    pub id: u64,
    #[serde(default)]
    pub mask_type: String,
    pub address: String,
    pub domain: u32,
    pub full_address: String,
    pub enabled: bool,
    pub description: String,
    pub used_on: Option<String>,
    pub block_list_emails: bool,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified_at: Option<DateTime<Utc>>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub num_forwarded: u64,
    pub num_blocked: u64,
    #[serde(default)]
    pub num_level_one_trackers_blocked: u64,
    pub num_replied: u64,
    pub num_spam: u64,
}

/// A phone number that has called or texted the user's Relay number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundContact {
    pub id: u64,
    pub relay_number: u64,
    pub inbound_number: String,
    pub last_inbound_date: Option<DateTime<Utc>>,
    /// `"call"` or `"text"`.
    pub last_inbound_type: String,
    pub num_calls: u64,
    pub num_calls_blocked: u64,
    pub last_call_date: Option<DateTime<Utc>>,
    pub num_texts: u64,
    pub num_texts_blocked: u64,
    pub last_text_date: Option<DateTime<Utc>>,
    pub blocked: bool,
}

/// Body for [`Client::create_relay_address`](crate::Client::create_relay_address).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRelayAddressRequest {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_on: Option<String>,
    pub block_list_emails: bool,
}

impl Default for CreateRelayAddressRequest {
    fn default() -> Self {
        Self {
            enabled: true,
            description: None,
            generated_for: None,
            used_on: None,
            block_list_emails: false,
        }
    }
}

impl CreateRelayAddressRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn generated_for(mut self, site: impl Into<String>) -> Self {
        self.generated_for = Some(site.into());
        self
    }

    pub fn used_on(mut self, sites: impl Into<String>) -> Self {
        self.used_on = Some(sites.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn block_list_emails(mut self, block: bool) -> Self {
        self.block_list_emails = block;
        self
    }
}

/// Body for [`Client::create_domain_address`](crate::Client::create_domain_address).
///
/// Custom-domain masks are named by the caller, so `address` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDomainAddressRequest {
    pub address: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_on: Option<String>,
    pub block_list_emails: bool,
}

impl CreateDomainAddressRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            enabled: true,
            description: None,
            used_on: None,
            block_list_emails: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn used_on(mut self, sites: impl Into<String>) -> Self {
        self.used_on = Some(sites.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn block_list_emails(mut self, block: bool) -> Self {
        self.block_list_emails = block;
        self
    }
}

/// Sparse update for a relay address. Only `Some` fields are sent; the
/// service leaves every omitted field as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRelayAddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_list_emails: Option<bool>,
}

impl UpdateRelayAddressRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn generated_for(mut self, site: impl Into<String>) -> Self {
        self.generated_for = Some(site.into());
        self
    }

    pub fn used_on(mut self, sites: impl Into<String>) -> Self {
        self.used_on = Some(sites.into());
        self
    }

    pub fn block_list_emails(mut self, block: bool) -> Self {
        self.block_list_emails = Some(block);
        self
    }

    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Sparse update for a domain address; see [`UpdateRelayAddressRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateDomainAddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_list_emails: Option<bool>,
}

impl UpdateDomainAddressRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn used_on(mut self, sites: impl Into<String>) -> Self {
        self.used_on = Some(sites.into());
        self
    }

    pub fn block_list_emails(mut self, block: bool) -> Self {
        self.block_list_emails = Some(block);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
