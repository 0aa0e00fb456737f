use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Blockscout instances known out of the box: origin key, smart-contracts api url, chain id.
const DEFAULT_CHAINS: [(&str, &str, &str); 9] = [
    (
        "optimism",
        "https://optimism.blockscout.com/api/v2/smart-contracts/",
        "eip155-10",
    ),
    (
        "polygon_zkevm",
        "https://zkevm.blockscout.com/api/v2/smart-contracts/",
        "eip155-1101",
    ),
    (
        "mode",
        "https://explorer.mode.network/api/v2/smart-contracts/",
        "eip155-34443",
    ),
    (
        "arbitrum",
        "https://arbitrum.blockscout.com//api/v2/smart-contracts/",
        "eip155-42161",
    ),
    (
        "zora",
        "https://explorer.zora.energy/api/v2/smart-contracts/",
        "eip155-7777777",
    ),
    (
        "base",
        "https://base.blockscout.com/api/v2/smart-contracts/",
        "eip155-8453",
    ),
    (
        "zksync_era",
        "https://zksync.blockscout.com/api/v2/smart-contracts/",
        "eip155-324",
    ),
    (
        "linea",
        "https://explorer.linea.build/api/v2/smart-contracts/",
        "eip155-59144",
    ),
    (
        "redstone",
        "https://explorer.redstone.xyz/api/v2/smart-contracts/",
        "eip155-17001",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainEndpoint {
    /// Url the contract address is appended to.
    pub api_url: String,
    pub chain_id: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown origin key: {0}")]
pub struct UnknownOrigin(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: BTreeMap<String, ChainEndpoint>,
}

impl Default for ChainRegistry {
    fn default() -> Self {
        let chains = DEFAULT_CHAINS
            .iter()
            .map(|(origin_key, api_url, chain_id)| {
                (
                    origin_key.to_string(),
                    ChainEndpoint {
                        api_url: api_url.to_string(),
                        chain_id: chain_id.to_string(),
                    },
                )
            })
            .collect();
        Self { chains }
    }
}

impl ChainRegistry {
    /// Default table extended with `overrides`. An override replaces
    /// the default entry with the same origin key.
    pub fn with_overrides(overrides: BTreeMap<String, ChainEndpoint>) -> Self {
        let mut registry = Self::default();
        registry.chains.extend(overrides);
        registry
    }

    pub fn resolve(&self, origin_key: &str) -> Result<&ChainEndpoint, UnknownOrigin> {
        self.chains
            .get(origin_key)
            .ok_or_else(|| UnknownOrigin(origin_key.to_string()))
    }

    pub fn chain_id(&self, origin_key: &str) -> Option<&str> {
        self.chains
            .get(origin_key)
            .map(|endpoint| endpoint.chain_id.as_str())
    }

    pub fn origin_keys(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }
}
