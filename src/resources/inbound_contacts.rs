//! `inboundcontact/` resource. Read-only; needs a Relay phone subscription.

use crate::{Client, InboundContact, Result};

/// Collection path, relative to the API base path.
pub const INBOUND_CONTACTS_PATH: &str = "inboundcontact/";

impl Client {
    /// List numbers that have called or texted the user's Relay number.
    ///
    /// Accounts without a phone subscription get an
    /// [`Error::Api`](crate::Error::Api), typically 403 or 404.
    pub async fn list_inbound_contacts(&self) -> Result<Vec<InboundContact>> {
        self.get_json(INBOUND_CONTACTS_PATH).await
    }
}
