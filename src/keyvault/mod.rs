//! Key Vault management operation groups
//!
//! - [`vaults`] - list and get managed key vaults
//! - [`operations`] - list the operations the provider exposes

pub mod operations;
pub mod vaults;

pub use operations::Operations;
pub use vaults::Vaults;

use crate::azure::client::AzureClient;

/// Provider namespace for Key Vault management.
pub const NAMESPACE: &str = "Microsoft.KeyVault";

/// REST api-version used by all Key Vault management calls.
pub const API_VERSION: &str = "2018-02-14";

impl AzureClient {
    /// Key Vault vaults operation group.
    pub fn vaults(&self) -> Vaults {
        Vaults::new(self.clone())
    }

    /// Key Vault provider operations.
    pub fn keyvault_operations(&self) -> Operations {
        Operations::new(self.clone())
    }
}
