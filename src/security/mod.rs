//! Security Center operation groups
//!
//! - [`alerts`] - list, get and state-transition security alerts
//! - [`operations`] - list the operations the provider exposes

pub mod alerts;
pub mod operations;

pub use alerts::Alerts;
pub use operations::Operations;

use crate::azure::client::AzureClient;

/// Provider namespace for Security Center.
pub const NAMESPACE: &str = "Microsoft.Security";

/// REST api-version used by all Security Center calls.
pub const API_VERSION: &str = "2015-06-01-preview";

impl AzureClient {
    /// Security Center alerts operation group.
    pub fn alerts(&self) -> Alerts {
        Alerts::new(self.clone())
    }

    /// Security Center provider operations.
    pub fn security_operations(&self) -> Operations {
        Operations::new(self.clone())
    }
}
