use crate::registry::ChainEndpoint;
use anyhow::anyhow;
use config::{Config, File};
use serde::{de::IgnoredAny, Deserialize};
use std::{collections::BTreeMap, num::NonZeroUsize, path::PathBuf};

const CONFIG_ENV_PREFIX: &str = "CONTRACTS_ENRICHER";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub explorer: ExplorerSettings,
    pub dispatcher: DispatcherSettings,
    pub input: InputSettings,
    pub output: OutputSettings,
    /// Additional chains, or replacements of the built-in ones, keyed by origin key.
    pub chains: BTreeMap<String, ChainEndpoint>,

    pub config: IgnoredAny,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerSettings {
    /// Number of attempts made for a single contract.
    /// Should be at least one. Set to `3` by default.
    pub attempts: NonZeroUsize,
    pub retry_delay_ms: u64,
    /// Seconds
    pub request_timeout: u64,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            attempts: NonZeroUsize::new(3).expect("Is not zero"),
            retry_delay_ms: 1000,
            request_timeout: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatcherSettings {
    pub concurrency: NonZeroUsize,
    /// `0` means all the contracts from the input.
    pub max_to_process: usize,
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        Self {
            concurrency: NonZeroUsize::new(50).expect("Is not zero"),
            max_to_process: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSettings {
    pub path: PathBuf,
    pub address_column: String,
    pub origin_key_column: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("unlabelled.csv"),
            address_column: "encode".to_string(),
            origin_key_column: "origin_key".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub contracts_path: PathBuf,
    pub stats_path: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            contracts_path: PathBuf::from("processed_contracts.json"),
            stats_path: None,
        }
    }
}

impl Settings {
    /// Reads the optional config file, and then environment variables
    /// prefixed with `CONTRACTS_ENRICHER__` on top of it.
    /// The file is taken from `config_path` or from `CONTRACTS_ENRICHER__CONFIG`.
    pub fn new(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.or_else(|| {
            std::env::var(format!("{CONFIG_ENV_PREFIX}__CONFIG"))
                .ok()
                .map(PathBuf::from)
        });

        let mut builder = Config::builder();
        if let Some(config_path) = config_path {
            builder = builder.add_source(File::from(config_path));
        };
        builder = builder.add_source(
            config::Environment::with_prefix(CONFIG_ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()?
            .try_deserialize()
            .map_err(|err| anyhow!(err))
    }
}
