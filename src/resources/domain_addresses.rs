//! `domainaddresses/` resource: masks on the user's custom subdomain.

use crate::client::item_path;
use crate::{
    Client, CreateDomainAddressRequest, DomainAddress, Result, UpdateDomainAddressRequest,
};

/// Collection path, relative to the API base path.
pub const DOMAIN_ADDRESSES_PATH: &str = "domainaddresses/";

impl Client {
    pub async fn list_domain_addresses(&self) -> Result<Vec<DomainAddress>> {
        self.get_json(DOMAIN_ADDRESSES_PATH).await
    }

    pub async fn get_domain_address(&self, id: u64) -> Result<DomainAddress> {
        self.get_json(&item_path(DOMAIN_ADDRESSES_PATH, id)).await
    }

    /// Create a mask such as `shop@<subdomain>.mozmail.com`.
    ///
    /// Requires a premium account with a registered subdomain; otherwise
    /// the service rejects the request with an [`Error::Api`](crate::Error::Api).
    pub async fn create_domain_address(
        &self,
        request: &CreateDomainAddressRequest,
    ) -> Result<DomainAddress> {
        self.post_json(DOMAIN_ADDRESSES_PATH, request).await
    }

    /// Change only the fields set on `request`.
    pub async fn update_domain_address(
        &self,
        id: u64,
        request: &UpdateDomainAddressRequest,
    ) -> Result<DomainAddress> {
        self.patch_json(&item_path(DOMAIN_ADDRESSES_PATH, id), request)
            .await
    }

    pub async fn delete_domain_address(&self, id: u64) -> Result<()> {
        self.delete_item(&item_path(DOMAIN_ADDRESSES_PATH, id)).await
    }
}
