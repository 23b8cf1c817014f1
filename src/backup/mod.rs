//! Recovery Services Backup operation group
//!
//! Covers the vault security PIN operation, which issues a short-lived
//! token used to authorize security-sensitive backup operations.

use crate::azure::client::{encode_segment, AzureClient};
use crate::error::Result;
use crate::models::backup::TokenInformation;

/// Provider namespace for Recovery Services.
pub const NAMESPACE: &str = "Microsoft.RecoveryServices";

/// REST api-version used by all Recovery Services Backup calls.
pub const API_VERSION: &str = "2016-12-01";

/// Backup operation group.
#[derive(Clone)]
pub struct Backup {
    client: AzureClient,
}

impl AzureClient {
    /// Recovery Services Backup operation group.
    pub fn backup(&self) -> Backup {
        Backup::new(self.clone())
    }
}

impl Backup {
    pub(crate) fn new(client: AzureClient) -> Self {
        Self { client }
    }

    /// Fetch the security PIN of one Recovery Services vault.
    pub async fn security_pin(
        &self,
        resource_group: &str,
        vault_name: &str,
    ) -> Result<TokenInformation> {
        let url = self.client.resource_group_provider_url(
            resource_group,
            NAMESPACE,
            &format!("vaults/{}/backupSecurityPIN", encode_segment(vault_name)),
            API_VERSION,
        );
        let response = self.client.get(&url).await?;
        serde_json::from_value(response).map_err(Into::into)
    }
}
