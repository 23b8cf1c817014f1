//! Client library for a slice of the Azure Resource Manager REST surface.
//!
//! Covered services:
//! - Security Center: the `alerts` operation group and the provider
//!   operations listing
//! - Key Vault management: vaults and the provider operations listing
//! - Recovery Services Backup: the vault security PIN operation
//!
//! The entry point is [`AzureClient`], which owns the credentials, the HTTP
//! client and the subscription scope. Operation groups are cheap handles
//! obtained from it:
//!
//! ```ignore
//! use azrm::{AzureClient, Credentials};
//!
//! async fn dismissed_alerts() -> azrm::Result<()> {
//!     let client = AzureClient::new(Credentials::from_env()?, "my-subscription-id")?;
//!     let mut alerts = client.alerts().list();
//!     while let Some(alert) = alerts.try_next().await? {
//!         println!("{:?}", alert.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! List calls return a [`Pager`], which fetches pages on demand and follows
//! the server's `nextLink` until the collection is exhausted.

pub mod azure;
pub mod backup;
pub mod config;
pub mod error;
pub mod keyvault;
pub mod models;
pub mod paging;
pub mod resource_id;
pub mod security;

pub use azure::auth::Credentials;
pub use azure::client::AzureClient;
pub use config::Config;
pub use error::{Error, Result};
pub use paging::{Page, Pager};
pub use resource_id::ResourceId;
