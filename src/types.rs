use serde::{Deserialize, Serialize, Serializer};
use std::time::Duration;

/// Canonical contract record: the unit of work of the pipeline and
/// the element of the output document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub address: String,
    pub chain_id: String,
    pub name: String,
    pub owner_project: String,
    pub usage_category: String,
    pub deployment_tx: String,
    pub deployer_address: String,
    pub deployment_date: String,
    pub verified_status: bool,
    pub is_proxy_contract: bool,
    pub proxy_address: String,
    pub implementation_address: String,
    pub source_repo_url: String,
    pub origin_key: String,
}

impl ContractRecord {
    /// Creates a seed record. The chain id starts equal to the origin key
    /// and is replaced with the canonical one once the record is enriched.
    pub fn new(address: &str, origin_key: impl Into<String>) -> Self {
        let origin_key = origin_key.into();
        Self {
            address: normalize_address(address),
            chain_id: origin_key.clone(),
            origin_key,
            ..Default::default()
        }
    }
}

/// Returns lowercase `0x`-prefixed address. Already normalized input is returned as is.
pub fn normalize_address(address: &str) -> String {
    let address = address.trim().to_lowercase();
    if address.starts_with("0x") {
        address
    } else {
        format!("0x{address}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub total_contracts: usize,
    pub processed_count: usize,
    pub contracts_with_name: usize,
    pub proxy_contracts: usize,
    #[serde(rename = "elapsed_time", serialize_with = "serialize_elapsed")]
    pub elapsed: Duration,
}

fn serialize_elapsed<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2} seconds", elapsed.as_secs_f64()))
}
