//! Typed Azure resource identifiers.
//!
//! ARM names every resource with a hierarchical path such as
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Security/locations/{loc}/alerts/{name}`.
//! This module parses those strings into a structured form so callers can
//! read the resource group or location back out of an identifier instead of
//! pattern-matching the raw path.

use std::fmt;

use crate::error::{Error, Result};

/// A parsed ARM resource identifier.
///
/// Parsing and formatting round-trip: `ResourceId::parse(s)?.to_string() == s`
/// for every well-formed identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    subscription_id: String,
    resource_group: Option<String>,
    provider: String,
    /// Type/name pairs after the provider namespace, in path order.
    segments: Vec<(String, String)>,
}

impl ResourceId {
    /// Parse an identifier path.
    ///
    /// Well-formed identifiers always contain a `providers` segment; the
    /// `resourceGroups` pair is optional (subscription-scoped resources omit
    /// it). Anything else is rejected.
    pub fn parse(id: &str) -> Result<Self> {
        let malformed = || Error::InvalidResourceId(id.to_string());

        let mut parts = id.split('/');
        if parts.next() != Some("") {
            return Err(malformed());
        }
        if parts.next() != Some("subscriptions") {
            return Err(malformed());
        }
        let subscription_id = parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;

        let mut resource_group = None;
        let mut next = parts.next().ok_or_else(malformed)?;
        if next == "resourceGroups" {
            let rg = parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
            resource_group = Some(rg.to_string());
            next = parts.next().ok_or_else(malformed)?;
        }

        if next != "providers" {
            return Err(malformed());
        }
        let provider = parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;

        let mut segments = Vec::new();
        while let Some(kind) = parts.next() {
            let name = parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
            if kind.is_empty() {
                return Err(malformed());
            }
            segments.push((kind.to_string(), name.to_string()));
        }
        if segments.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            subscription_id: subscription_id.to_string(),
            resource_group,
            provider: provider.to_string(),
            segments,
        })
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// The `resourceGroups/<name>` value, when the identifier is
    /// resource-group scoped.
    pub fn resource_group(&self) -> Option<&str> {
        self.resource_group.as_deref()
    }

    /// Provider namespace, e.g. `Microsoft.Security`.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// The trailing resource name.
    pub fn name(&self) -> &str {
        // segments is non-empty by construction
        &self.segments.last().expect("parsed id has segments").1
    }

    /// The trailing resource type segment, e.g. `alerts`.
    pub fn resource_type(&self) -> &str {
        &self.segments.last().expect("parsed id has segments").0
    }

    /// The value of an interior `locations/{loc}` scope pair, if present.
    ///
    /// Region-scoped Security Center identifiers carry one between the
    /// provider namespace and the resource type.
    pub fn location(&self) -> Option<&str> {
        self.segments
            .iter()
            .find(|(kind, _)| kind == "locations")
            .map(|(_, name)| name.as_str())
    }

    /// Whether the identifier is scoped to a resource group.
    pub fn is_resource_group_scoped(&self) -> bool {
        self.resource_group.is_some()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/subscriptions/{}", self.subscription_id)?;
        if let Some(rg) = &self.resource_group {
            write!(f, "/resourceGroups/{rg}")?;
        }
        write!(f, "/providers/{}", self.provider)?;
        for (kind, name) in &self.segments {
            write!(f, "/{kind}/{name}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ResourceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RG_ALERT_ID: &str = "/subscriptions/20ff7fc3-e762-44dd-bd96-b71116dcdc23\
                               /resourceGroups/myRg/providers/Microsoft.Security\
                               /locations/centralus/alerts/2518298467986649999_4d25d1d8";

    #[test]
    fn parses_resource_group_scoped_alert_id() {
        let id = ResourceId::parse(RG_ALERT_ID).unwrap();
        assert_eq!(id.subscription_id(), "20ff7fc3-e762-44dd-bd96-b71116dcdc23");
        assert_eq!(id.resource_group(), Some("myRg"));
        assert_eq!(id.provider(), "Microsoft.Security");
        assert_eq!(id.location(), Some("centralus"));
        assert_eq!(id.resource_type(), "alerts");
        assert_eq!(id.name(), "2518298467986649999_4d25d1d8");
        assert!(id.is_resource_group_scoped());
    }

    #[test]
    fn parses_subscription_scoped_id() {
        let raw = "/subscriptions/sub1/providers/Microsoft.KeyVault/vaults/prod-vault";
        let id = ResourceId::parse(raw).unwrap();
        assert_eq!(id.resource_group(), None);
        assert_eq!(id.location(), None);
        assert_eq!(id.name(), "prod-vault");
        assert!(!id.is_resource_group_scoped());
    }

    #[test]
    fn display_round_trips() {
        let raw = "/subscriptions/sub1/resourceGroups/rg-1/providers/Microsoft.KeyVault/vaults/v1";
        let id = ResourceId::parse(raw).unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn rejects_malformed_ids() {
        for bad in [
            "",
            "/",
            "subscriptions/sub1",
            "/subscriptions",
            "/subscriptions/sub1",
            "/subscriptions/sub1/providers",
            "/subscriptions/sub1/providers/Microsoft.Security",
            "/subscriptions/sub1/resourceGroups//providers/Microsoft.Security/alerts/a",
            "/subscriptions/sub1/providers/Microsoft.Security/alerts",
            "/wrong/sub1/providers/Microsoft.Security/alerts/a",
        ] {
            assert!(ResourceId::parse(bad).is_err(), "accepted: {bad}");
        }
    }
}
