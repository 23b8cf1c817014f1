//! Wire models for the covered management APIs.
//!
//! All types are plain serde records mirroring the JSON bodies: optional
//! fields are omitted when unset, unknown wire fields are ignored, and
//! server-assigned read-only fields are never emitted on requests.
//!
//! - [`security`] - Security Center alerts and operations
//! - [`keyvault`] - Key Vault management operations and vaults
//! - [`backup`] - Recovery Services Backup token information

pub mod backup;
pub mod keyvault;
pub mod security;

use serde::{Deserialize, Serialize};

/// ARM error envelope returned with non-success statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CloudErrorBody>,
}

/// Error detail carried inside [`CloudError`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
