//! `relayaddresses/` resource: random email masks.

use crate::client::item_path;
use crate::{Client, CreateRelayAddressRequest, RelayAddress, Result, UpdateRelayAddressRequest};

/// Collection path, relative to the API base path.
pub const RELAY_ADDRESSES_PATH: &str = "relayaddresses/";

impl Client {
    /// List all relay addresses, in the order the service returns them.
    pub async fn list_relay_addresses(&self) -> Result<Vec<RelayAddress>> {
        self.get_json(RELAY_ADDRESSES_PATH).await
    }

    /// Fetch one relay address by id.
    pub async fn get_relay_address(&self, id: u64) -> Result<RelayAddress> {
        self.get_json(&item_path(RELAY_ADDRESSES_PATH, id)).await
    }

    /// Create a new random mask.
    ///
    /// Free accounts at their mask limit get a 403 [`Error::Api`](crate::Error::Api).
    ///
    /// # Examples
    /// ```no_run
    /// # use ffrelay_client::{Client, CreateRelayAddressRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ffrelay_client::Error> {
    /// let client = Client::new("my-api-token")?;
    /// let request = CreateRelayAddressRequest::new()
    ///     .description("Shopping")
    ///     .generated_for("example.com");
    /// let mask = client.create_relay_address(&request).await?;
    /// println!("{}", mask.full_address);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_relay_address(
        &self,
        request: &CreateRelayAddressRequest,
    ) -> Result<RelayAddress> {
        self.post_json(RELAY_ADDRESSES_PATH, request).await
    }

    /// Change only the fields set on `request`.
    ///
    /// # Examples
    /// ```no_run
    /// # use ffrelay_client::{Client, UpdateRelayAddressRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ffrelay_client::Error> {
    /// let client = Client::new("my-api-token")?;
    /// let request = UpdateRelayAddressRequest::new().enabled(false);
    /// let mask = client.update_relay_address(12345, &request).await?;
    /// assert!(!mask.enabled);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_relay_address(
        &self,
        id: u64,
        request: &UpdateRelayAddressRequest,
    ) -> Result<RelayAddress> {
        self.patch_json(&item_path(RELAY_ADDRESSES_PATH, id), request)
            .await
    }

    /// Delete a relay address. The service answers 204 with no body.
    pub async fn delete_relay_address(&self, id: u64) -> Result<()> {
        self.delete_item(&item_path(RELAY_ADDRESSES_PATH, id)).await
    }
}
