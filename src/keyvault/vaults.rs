//! Key Vault Vaults
//!
//! List and point reads for managed vaults.

use super::{API_VERSION, NAMESPACE};
use crate::azure::client::{encode_segment, AzureClient};
use crate::error::Result;
use crate::models::keyvault::Vault;
use crate::paging::Pager;

/// Vaults operation group.
#[derive(Clone)]
pub struct Vaults {
    client: AzureClient,
}

impl Vaults {
    pub(crate) fn new(client: AzureClient) -> Self {
        Self { client }
    }

    /// List every vault of the subscription.
    pub fn list_by_subscription(&self) -> Pager<Vault> {
        let url = self
            .client
            .subscription_provider_url(NAMESPACE, "vaults", API_VERSION);
        Pager::new(self.client.clone(), url)
    }

    /// List the vaults of one resource group.
    pub fn list_by_resource_group(&self, resource_group: &str) -> Pager<Vault> {
        let url = self.client.resource_group_provider_url(
            resource_group,
            NAMESPACE,
            "vaults",
            API_VERSION,
        );
        Pager::new(self.client.clone(), url)
    }

    /// Get one vault by resource group and name.
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) when the name
    /// does not resolve.
    pub async fn get(&self, resource_group: &str, name: &str) -> Result<Vault> {
        let url = self.client.resource_group_provider_url(
            resource_group,
            NAMESPACE,
            &format!("vaults/{}", encode_segment(name)),
            API_VERSION,
        );
        let response = self.client.get(&url).await?;
        serde_json::from_value(response).map_err(Into::into)
    }
}
