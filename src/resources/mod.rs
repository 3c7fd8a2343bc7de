//! Typed operations for each Relay API resource.

mod domain_addresses;
mod inbound_contacts;
mod profiles;
mod relay_addresses;

pub use domain_addresses::DOMAIN_ADDRESSES_PATH;
pub use inbound_contacts::INBOUND_CONTACTS_PATH;
pub use profiles::PROFILES_PATH;
pub use relay_addresses::RELAY_ADDRESSES_PATH;
