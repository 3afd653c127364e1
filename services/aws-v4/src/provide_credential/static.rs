use crate::Credential;
use async_trait::async_trait;
use sqsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides static AWS credentials.
///
/// This provider is used when you have the access key ID and secret access key
/// directly and want to use them without any dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with access key ID and secret access key.
    ///
    /// Keys are validated the same way as [`Credential::new`].
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Result<Self> {
        Ok(Self {
            credential: Credential::new(access_key_id, secret_access_key)?,
        })
    }

    /// Set the session token.
    pub fn with_session_token(mut self, token: &str) -> Result<Self> {
        self.credential = self.credential.with_session_token(token)?;
        Ok(self)
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
