//! # Firefox Relay Client
//! Asynchronous wrapper around the Firefox Relay REST API, providing typed methods to list profiles, manage email masks on the shared and custom domains, and read phone contacts from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers and scripts that need to create, toggle, or clean up Relay masks without the web dashboard: configure with [`ClientBuilder`] and an API token, then call the per-resource methods ([`Client::list_relay_addresses`], [`Client::update_domain_address`], ...).
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. The client holds no mutable state, so it can be cloned and used from many tasks at once.
//!
//! ## Out of scope
//! No caching, retries, or request batching. Every call is exactly one HTTP request and every failure is returned as-is.
//!
//! ## Errors
//! Transport failures surface as [`Error::Request`]. Any status of 400 or above becomes [`Error::Api`] with the status code and the raw body text. Bodies that do not match the expected shape become [`Error::Decode`], and request bodies that cannot be serialized become [`Error::Encode`] before anything is sent. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use ffrelay_client::{Client, CreateRelayAddressRequest, UpdateRelayAddressRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ffrelay_client::Error> {
//!     let client = Client::new("my-api-token")?;
//!
//!     let mask = client
//!         .create_relay_address(&CreateRelayAddressRequest::new().description("Newsletter"))
//!         .await?;
//!     println!("Created: {}", mask.full_address);
//!
//!     let update = UpdateRelayAddressRequest::new().enabled(false);
//!     client.update_relay_address(mask.id, &update).await?;
//!
//!     client.delete_relay_address(mask.id).await?;
//!     Ok(())
//! }
//! ```

mod bounce;
mod client;
mod error;
mod models;
mod resources;

pub use bounce::{BounceStatus, BounceStatusError};
pub use client::{API_BASE_PATH, Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::Error;
pub use models::{
    CreateDomainAddressRequest, CreateRelayAddressRequest, DomainAddress, InboundContact, Profile,
    RelayAddress, UpdateDomainAddressRequest, UpdateRelayAddressRequest,
};
pub use resources::{
    DOMAIN_ADDRESSES_PATH, INBOUND_CONTACTS_PATH, PROFILES_PATH, RELAY_ADDRESSES_PATH,
};

/// Result type alias for Firefox Relay operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
