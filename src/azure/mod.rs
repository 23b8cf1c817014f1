//! Azure Resource Manager interaction module
//!
//! This module provides the core functionality for talking to the ARM REST
//! surface: bearer-token credentials, the HTTP client wrapper, and the main
//! client with its per-scope URL builders.
//!
//! # Module Structure
//!
//! - [`auth`] - Bearer token providers with expiry-aware caching
//! - [`client`] - Main Azure client for making API requests
//! - [`http`] - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```ignore
//! use azrm::azure::client::AzureClient;
//! use azrm::azure::auth::Credentials;
//!
//! async fn example() -> azrm::Result<()> {
//!     let client = AzureClient::new(Credentials::from_env()?, "my-subscription")?;
//!     let alerts = client.alerts().list().all().await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod http;
