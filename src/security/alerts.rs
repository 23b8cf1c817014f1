//! Security Center Alerts
//!
//! One method per REST endpoint of the `alerts` operation group. Alerts
//! exist at subscription or resource-group scope, each with and without a
//! region scope. Region-scoped calls take the location explicitly; there is
//! no ambient location state on the client.

use serde_json::Value;

use super::{API_VERSION, NAMESPACE};
use crate::azure::client::{encode_segment, AzureClient};
use crate::error::Result;
use crate::models::security::{Alert, AlertAction};
use crate::paging::Pager;

/// Alerts operation group.
#[derive(Clone)]
pub struct Alerts {
    client: AzureClient,
}

impl Alerts {
    pub(crate) fn new(client: AzureClient) -> Self {
        Self { client }
    }

    /// List all alerts of the subscription.
    pub fn list(&self) -> Pager<Alert> {
        let url = self
            .client
            .subscription_provider_url(NAMESPACE, "alerts", API_VERSION);
        Pager::new(self.client.clone(), url)
    }

    /// List the alerts of one resource group.
    pub fn list_by_resource_group(&self, resource_group: &str) -> Pager<Alert> {
        let url = self.client.resource_group_provider_url(
            resource_group,
            NAMESPACE,
            "alerts",
            API_VERSION,
        );
        Pager::new(self.client.clone(), url)
    }

    /// List subscription-level alerts detected in one region.
    pub fn list_subscription_level_by_region(&self, location: &str) -> Pager<Alert> {
        let url = self.client.subscription_provider_url(
            NAMESPACE,
            &format!("locations/{}/alerts", encode_segment(location)),
            API_VERSION,
        );
        Pager::new(self.client.clone(), url)
    }

    /// List resource-group-level alerts detected in one region.
    pub fn list_resource_group_level_by_region(
        &self,
        location: &str,
        resource_group: &str,
    ) -> Pager<Alert> {
        let url = self.client.resource_group_provider_url(
            resource_group,
            NAMESPACE,
            &format!("locations/{}/alerts", encode_segment(location)),
            API_VERSION,
        );
        Pager::new(self.client.clone(), url)
    }

    /// Get one subscription-level alert.
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) when the name
    /// does not resolve in the given region.
    pub async fn get_subscription_level(&self, location: &str, name: &str) -> Result<Alert> {
        let url = self.client.subscription_provider_url(
            NAMESPACE,
            &alert_path(location, name),
            API_VERSION,
        );
        let response = self.client.get(&url).await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    /// Get one resource-group-level alert.
    pub async fn get_resource_group_level(
        &self,
        location: &str,
        resource_group: &str,
        name: &str,
    ) -> Result<Alert> {
        let url = self.client.resource_group_provider_url(
            resource_group,
            NAMESPACE,
            &alert_path(location, name),
            API_VERSION,
        );
        let response = self.client.get(&url).await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    /// Apply a state transition to a subscription-level alert.
    ///
    /// The service answers with an empty body; repeating a transition that
    /// is already in effect succeeds idempotently.
    pub async fn update_subscription_level_state(
        &self,
        location: &str,
        name: &str,
        action: AlertAction,
    ) -> Result<()> {
        let url = self.client.subscription_provider_url(
            NAMESPACE,
            &format!("{}/{}", alert_path(location, name), action),
            API_VERSION,
        );
        self.post_action(&url).await
    }

    /// Apply a state transition to a resource-group-level alert.
    pub async fn update_resource_group_level_state(
        &self,
        location: &str,
        resource_group: &str,
        name: &str,
        action: AlertAction,
    ) -> Result<()> {
        let url = self.client.resource_group_provider_url(
            resource_group,
            NAMESPACE,
            &format!("{}/{}", alert_path(location, name), action),
            API_VERSION,
        );
        self.post_action(&url).await
    }

    async fn post_action(&self, url: &str) -> Result<()> {
        let response: Value = self.client.post(url, None).await?;
        // Action endpoints return 200/202/204 with no meaningful body
        if !response.is_null() {
            tracing::debug!("alert action returned a body, ignoring");
        }
        Ok(())
    }
}

/// Provider-relative path of one alert in one region.
fn alert_path(location: &str, name: &str) -> String {
    format!(
        "locations/{}/alerts/{}",
        encode_segment(location),
        encode_segment(name)
    )
}
