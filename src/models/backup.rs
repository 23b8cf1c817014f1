//! Recovery Services Backup wire models (api-version 2016-12-01).

use serde::{Deserialize, Serialize};

/// The token information details.
///
/// Returned by the vault `backupSecurityPIN` operation. Note the wire name
/// of the PIN field is `securityPIN`, not camelCase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokenInformation {
    /// Token value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Expiry time of token.
    #[serde(
        rename = "expiryTimeInUtcTicks",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_time_in_utc_ticks: Option<i64>,
    /// Security PIN.
    #[serde(rename = "securityPIN", default, skip_serializing_if = "Option::is_none")]
    pub security_pin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_exact_wire_names() {
        let info = TokenInformation {
            token: Some("tok".to_string()),
            expiry_time_in_utc_ticks: Some(636_646_224_000_000_000),
            security_pin: Some("153212".to_string()),
        };
        let wire = serde_json::to_value(&info).unwrap();
        assert_eq!(wire["token"], "tok");
        assert_eq!(wire["expiryTimeInUtcTicks"], 636_646_224_000_000_000_i64);
        assert_eq!(wire["securityPIN"], "153212");

        let back: TokenInformation = serde_json::from_value(wire).unwrap();
        assert_eq!(back, info);
    }
}
