//! Azure Client
//!
//! Main client for interacting with ARM APIs, combining authentication and
//! HTTP functionality with the subscription scope and endpoint selection.

use serde_json::Value;

use super::auth::Credentials;
use super::http::HttpClient;
use crate::error::{Error, Result};

/// Public cloud Resource Manager endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";

/// Main ARM client.
///
/// Immutable after construction; cloning is cheap and clones share the
/// connection pool and token cache.
#[derive(Clone)]
pub struct AzureClient {
    pub credentials: Credentials,
    pub http: HttpClient,
    subscription_id: String,
    endpoint: String,
}

impl AzureClient {
    /// Create a new client against the public cloud endpoint.
    pub fn new(credentials: Credentials, subscription_id: &str) -> Result<Self> {
        let http = HttpClient::new()?;

        Ok(Self {
            credentials,
            http,
            subscription_id: subscription_id.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different Resource Manager endpoint
    /// (a sovereign cloud or a test server).
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let parsed = url::Url::parse(endpoint)
            .map_err(|e| Error::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        if !parsed.has_host() {
            return Err(Error::InvalidEndpoint(format!(
                "no host in {endpoint}"
            )));
        }
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// The subscription all subscription-scoped URLs are built against.
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the current access token
    pub async fn get_token(&self) -> Result<String> {
        self.credentials.get_token().await
    }

    /// Make a GET request to an ARM URL
    pub async fn get(&self, url: &str) -> Result<Value> {
        let token = self.get_token().await?;
        self.http.get(url, &token).await
    }

    /// Make a POST request to an ARM URL
    pub async fn post(&self, url: &str, body: Option<&Value>) -> Result<Value> {
        let token = self.get_token().await?;
        self.http.post(url, &token, body).await
    }

    /// Make a DELETE request to an ARM URL
    pub async fn delete(&self, url: &str) -> Result<Value> {
        let token = self.get_token().await?;
        self.http.delete(url, &token).await
    }

    // =========================================================================
    // URL builders
    //
    // `path` is a provider-relative path whose segments the caller has
    // already percent-encoded via `encode_segment` where user-supplied.
    // =========================================================================

    /// Build a tenant-scoped provider URL: `/providers/{ns}/{path}`
    pub fn tenant_provider_url(&self, namespace: &str, path: &str, api_version: &str) -> String {
        format!(
            "{}/providers/{}/{}?api-version={}",
            self.endpoint, namespace, path, api_version
        )
    }

    /// Build a subscription-scoped provider URL:
    /// `/subscriptions/{sub}/providers/{ns}/{path}`
    pub fn subscription_provider_url(
        &self,
        namespace: &str,
        path: &str,
        api_version: &str,
    ) -> String {
        format!(
            "{}/subscriptions/{}/providers/{}/{}?api-version={}",
            self.endpoint,
            encode_segment(&self.subscription_id),
            namespace,
            path,
            api_version
        )
    }

    /// Build a resource-group-scoped provider URL:
    /// `/subscriptions/{sub}/resourceGroups/{rg}/providers/{ns}/{path}`
    pub fn resource_group_provider_url(
        &self,
        resource_group: &str,
        namespace: &str,
        path: &str,
        api_version: &str,
    ) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/{}/{}?api-version={}",
            self.endpoint,
            encode_segment(&self.subscription_id),
            encode_segment(resource_group),
            namespace,
            path,
            api_version
        )
    }
}

/// Percent-encode one caller-supplied path segment.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AzureClient {
        AzureClient::new(Credentials::from_static("t"), "sub-1").unwrap()
    }

    #[test]
    fn builds_scoped_urls() {
        let client = client();
        assert_eq!(
            client.subscription_provider_url("Microsoft.Security", "alerts", "2015-06-01-preview"),
            "https://management.azure.com/subscriptions/sub-1/providers/Microsoft.Security/alerts?api-version=2015-06-01-preview"
        );
        assert_eq!(
            client.resource_group_provider_url(
                "my rg",
                "Microsoft.KeyVault",
                "vaults/v1",
                "2018-02-14"
            ),
            "https://management.azure.com/subscriptions/sub-1/resourceGroups/my%20rg/providers/Microsoft.KeyVault/vaults/v1?api-version=2018-02-14"
        );
        assert_eq!(
            client.tenant_provider_url("Microsoft.KeyVault", "operations", "2018-02-14"),
            "https://management.azure.com/providers/Microsoft.KeyVault/operations?api-version=2018-02-14"
        );
    }

    #[test]
    fn endpoint_override_trims_trailing_slash() {
        let client = client().with_endpoint("http://127.0.0.1:9001/").unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9001");
        assert!(client
            .subscription_provider_url("Microsoft.Security", "alerts", "v")
            .starts_with("http://127.0.0.1:9001/subscriptions/"));
    }

    #[test]
    fn rejects_invalid_endpoint() {
        assert!(client().with_endpoint("not a url").is_err());
    }
}
