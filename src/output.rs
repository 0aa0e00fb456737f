use crate::types::{ContractRecord, RunStats};
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

pub async fn write_contracts(path: &Path, contracts: &[ContractRecord]) -> anyhow::Result<()> {
    write_json(path, contracts)
        .await
        .context("writing processed contracts")
}

pub async fn write_stats(path: &Path, stats: &RunStats) -> anyhow::Result<()> {
    write_json(path, stats).await.context("writing run stats")
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let content = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, content)
        .await
        .context(format!("writing file: {path:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn contracts_are_written_as_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed_contracts.json");
        let contract = ContractRecord {
            name: "ERC1967Proxy".to_string(),
            verified_status: true,
            is_proxy_contract: true,
            chain_id: "eip155-8453".to_string(),
            ..ContractRecord::new("0xabc123", "base")
        };

        write_contracts(&path, &[contract]).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            json!([{
                "address": "0xabc123",
                "chain_id": "eip155-8453",
                "name": "ERC1967Proxy",
                "owner_project": "",
                "usage_category": "",
                "deployment_tx": "",
                "deployer_address": "",
                "deployment_date": "",
                "verified_status": true,
                "is_proxy_contract": true,
                "proxy_address": "",
                "implementation_address": "",
                "source_repo_url": "",
                "origin_key": "base"
            }]),
            written
        );
    }

    #[tokio::test]
    async fn stats_are_written_as_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let stats = RunStats {
            total_contracts: 1,
            processed_count: 1,
            contracts_with_name: 0,
            proxy_contracts: 0,
            elapsed: Duration::from_secs(2),
        };

        write_stats(&path, &stats).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            json!({
                "total_contracts": 1,
                "processed_count": 1,
                "contracts_with_name": 0,
                "proxy_contracts": 0,
                "elapsed_time": "2.00 seconds"
            }),
            written
        );
    }

    #[tokio::test]
    async fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("stats.json");
        let err = write_stats(&path, &RunStats::default()).await.unwrap_err();
        assert_eq!("writing run stats", err.to_string());
    }
}
