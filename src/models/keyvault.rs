//! Key Vault management wire models (api-version 2018-02-14).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One operation exposed by the Microsoft.KeyVault provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing)]
    pub name: Option<String>,
    #[serde(default, skip_serializing)]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<OperationDisplay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<OperationProperties>,
}

/// Display metadata of an [`Operation`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OperationDisplay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Properties bag of an [`Operation`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_specification: Option<ServiceSpecification>,
}

/// One property of operation, include log specifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_specifications: Option<Vec<LogSpecification>>,
}

/// Log specification of operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_duration: Option<String>,
}

/// A managed key vault resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vault {
    #[serde(default, skip_serializing)]
    pub id: Option<String>,
    #[serde(default, skip_serializing)]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing)]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<VaultProperties>,
}

/// Settable properties of a [`Vault`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VaultProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_for_deployment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_soft_delete: Option<bool>,
}

/// SKU details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Sku {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_carries_service_specification() {
        let json = r#"{
            "name": "Microsoft.KeyVault/vaults/read",
            "origin": "user,system",
            "display": {
                "provider": "Microsoft Key Vault",
                "resource": "Vault",
                "operation": "View Key Vault"
            },
            "properties": {
                "serviceSpecification": {
                    "logSpecifications": [
                        {"name": "AuditEvent", "displayName": "Audit Logs", "blobDuration": "PT1H"}
                    ]
                }
            }
        }"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        let spec = op.properties.unwrap().service_specification.unwrap();
        let logs = spec.log_specifications.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].name.as_deref(), Some("AuditEvent"));
        assert_eq!(logs[0].blob_duration.as_deref(), Some("PT1H"));
    }

    #[test]
    fn service_specification_round_trips() {
        let spec = ServiceSpecification {
            log_specifications: Some(vec![LogSpecification {
                name: Some("AuditEvent".to_string()),
                display_name: Some("Audit Logs".to_string()),
                blob_duration: None,
            }]),
        };
        let wire = serde_json::to_string(&spec).unwrap();
        assert!(!wire.contains("blobDuration"));
        let back: ServiceSpecification = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, spec);
    }
}
