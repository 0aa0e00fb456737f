use serde::Deserialize;
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnError};

// Definition of the blockscout `/api/v2/smart-contracts/{address}` response.
// Only the fields used for enrichment are extracted; the api returns `null`
// for most of them on unverified contracts, so all of them are optional.
// A value of unexpected type is treated as absent.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExplorerResponse {
    #[serde_as(as = "DefaultOnError")]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub is_verified: Option<bool>,
    #[serde_as(as = "DefaultOnError")]
    pub is_fully_verified: Option<bool>,
    #[serde_as(as = "DefaultOnError")]
    pub is_partially_verified: Option<bool>,
    #[serde_as(as = "DefaultOnError")]
    pub is_verified_via_sourcify: Option<bool>,
    #[serde_as(as = "DefaultOnError")]
    pub sourcify_repo_url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub minimal_proxy_address_hash: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub verified_at: Option<String>,

    /// Everything else the explorer returned. Kept but never interpreted.
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl ExplorerResponse {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn is_verified(&self) -> bool {
        [
            self.is_verified,
            self.is_fully_verified,
            self.is_partially_verified,
            self.is_verified_via_sourcify,
        ]
        .into_iter()
        .any(|flag| flag.unwrap_or_default())
    }

    pub fn sourcify_repo_url(&self) -> &str {
        self.sourcify_repo_url.as_deref().unwrap_or_default()
    }

    pub fn minimal_proxy_address_hash(&self) -> &str {
        self.minimal_proxy_address_hash
            .as_deref()
            .unwrap_or_default()
    }

    pub fn verified_at(&self) -> &str {
        self.verified_at.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize_keeps_unknown_fields() {
        let response: ExplorerResponse = serde_json::from_value(json!({
            "name": "L2StandardBridge",
            "is_verified": true,
            "is_fully_verified": null,
            "sourcify_repo_url": "https://repo.sourcify.dev/contracts/full_match/10/0x4200000000000000000000000000000000000010/",
            "minimal_proxy_address_hash": null,
            "verified_at": "2023-06-14T13:12:11.476587Z",
            "compiler_version": "v0.8.15+commit.e14f2714",
            "optimization_enabled": true,
            "abi": []
        }))
        .unwrap();

        assert_eq!("L2StandardBridge", response.name());
        assert!(response.is_verified());
        assert_eq!("", response.minimal_proxy_address_hash());
        assert_eq!("2023-06-14T13:12:11.476587Z", response.verified_at());
        assert_eq!(
            vec!["abi", "compiler_version", "optimization_enabled"],
            response
                .additional_fields
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn deserialize_empty_object() {
        let response: ExplorerResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(ExplorerResponse::default(), response);
        assert_eq!("", response.name());
        assert!(!response.is_verified());
    }

    #[test]
    fn deserialize_wrong_typed_fields_as_absent() {
        let response: ExplorerResponse = serde_json::from_value(json!({
            "name": "Token",
            "is_verified": "true",
            "is_fully_verified": true,
            "minimal_proxy_address_hash": ["0x01"],
            "verified_at": 12345
        }))
        .unwrap();

        assert_eq!("Token", response.name());
        assert_eq!(None, response.is_verified);
        assert!(response.is_verified());
        assert_eq!("", response.minimal_proxy_address_hash());
        assert_eq!("", response.verified_at());
        assert!(response.additional_fields.is_empty());
    }

    #[test]
    fn deserialize_non_object_fails() {
        assert!(serde_json::from_str::<ExplorerResponse>("[]").is_err());
        assert!(serde_json::from_str::<ExplorerResponse>("\"busy\"").is_err());
        assert!(serde_json::from_str::<ExplorerResponse>("<html>busy</html>").is_err());
    }

    #[test]
    fn any_verification_flag_is_enough() {
        for flag in [
            "is_verified",
            "is_fully_verified",
            "is_partially_verified",
            "is_verified_via_sourcify",
        ] {
            let value = Value::Object(Map::from_iter([(flag.to_string(), Value::Bool(true))]));
            let response: ExplorerResponse = serde_json::from_value(value).unwrap();
            assert!(response.is_verified(), "flag {flag} is not taken into account");
        }
    }
}
