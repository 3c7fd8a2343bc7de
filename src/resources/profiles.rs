//! `profiles/` resource.

use crate::{Client, Profile, Result};

/// Collection path, relative to the API base path.
pub const PROFILES_PATH: &str = "profiles/";

impl Client {
    /// List the profiles visible to the token. In practice this is the
    /// single profile of the account that owns it.
    ///
    /// A malformed `bounce_status` in any entry fails the whole call with
    /// [`Error::Decode`](crate::Error::Decode).
    ///
    /// # Examples
    /// ```no_run
    /// # use ffrelay_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ffrelay_client::Error> {
    /// let client = Client::new("my-api-token")?;
    /// for profile in client.list_profiles().await? {
    ///     println!("{} premium={}", profile.id, profile.has_premium);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.get_json(PROFILES_PATH).await
    }
}
