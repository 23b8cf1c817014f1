//! Security Center provider operations listing.

use super::{API_VERSION, NAMESPACE};
use crate::azure::client::AzureClient;
use crate::models::security::Operation;
use crate::paging::Pager;

/// Operations operation group.
#[derive(Clone)]
pub struct Operations {
    client: AzureClient,
}

impl Operations {
    pub(crate) fn new(client: AzureClient) -> Self {
        Self { client }
    }

    /// List every REST operation of the Microsoft.Security provider.
    ///
    /// Tenant-scoped: the URL carries no subscription segment.
    pub fn list(&self) -> Pager<Operation> {
        let url = self
            .client
            .tenant_provider_url(NAMESPACE, "operations", API_VERSION);
        Pager::new(self.client.clone(), url)
    }
}
