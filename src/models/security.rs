//! Security Center wire models (api-version 2015-06-01-preview).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A security alert detected by Security Center.
///
/// Alerts are only ever produced by the service; the client reads them and
/// changes their state through the dedicated action endpoint, never by
/// resubmitting the record. `id`, `name` and `type` are server-assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default, skip_serializing)]
    pub id: Option<String>,
    #[serde(default, skip_serializing)]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing)]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<AlertProperties>,
}

/// Detail payload of an [`Alert`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertProperties {
    /// Lifecycle state, e.g. `Active` or `Dismissed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compromised_entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_steps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_time_utc: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_time_utc: Option<DateTime<Utc>>,
}

/// State transition applied through the alert action endpoint.
///
/// Rendered as the final path segment of the update URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Dismiss,
    Reactivate,
}

impl AlertAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertAction::Dismiss => "Dismiss",
            AlertAction::Reactivate => "Reactivate",
        }
    }
}

impl std::fmt::Display for AlertAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation exposed by the Microsoft.Security provider.
///
/// `name` and `origin` are assigned by the service and never sent back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing)]
    pub name: Option<String>,
    #[serde(default, skip_serializing)]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<OperationDisplay>,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_ignores_unknown_wire_fields() {
        let json = r#"{
            "id": "/subscriptions/s/providers/Microsoft.Security/locations/centralus/alerts/a1",
            "name": "a1",
            "type": "Microsoft.Security/locations/alerts",
            "properties": {
                "state": "Active",
                "alertDisplayName": "Suspicious process executed",
                "confidenceScore": 0.9,
                "extendedProperties": {"user name": "admin"}
            }
        }"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.name.as_deref(), Some("a1"));
        let props = alert.properties.unwrap();
        assert_eq!(props.state.as_deref(), Some("Active"));
        assert_eq!(
            props.alert_display_name.as_deref(),
            Some("Suspicious process executed")
        );
    }

    #[test]
    fn read_only_fields_are_not_emitted() {
        let alert = Alert {
            id: Some("/subscriptions/s/providers/p/alerts/a".to_string()),
            name: Some("a".to_string()),
            resource_type: Some("alerts".to_string()),
            properties: Some(AlertProperties {
                state: Some("Active".to_string()),
                ..Default::default()
            }),
        };
        let wire = serde_json::to_value(&alert).unwrap();
        assert!(wire.get("id").is_none());
        assert!(wire.get("name").is_none());
        assert!(wire.get("type").is_none());
        assert_eq!(wire["properties"]["state"], "Active");
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let props = AlertProperties {
            state: Some("Dismissed".to_string()),
            ..Default::default()
        };
        let wire = serde_json::to_string(&props).unwrap();
        assert_eq!(wire, r#"{"state":"Dismissed"}"#);
    }
}
