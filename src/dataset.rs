use crate::{settings::InputSettings, types::ContractRecord};
use anyhow::Context;
use std::path::Path;
use tokio::fs;

/// Reads seed records from the csv file described by `settings`.
pub async fn load_contracts(
    path: &Path,
    settings: &InputSettings,
) -> anyhow::Result<Vec<ContractRecord>> {
    let content = fs::read(path)
        .await
        .context(format!("reading file: {path:?}"))?;
    parse_contracts(
        content.as_slice(),
        &settings.address_column,
        &settings.origin_key_column,
    )
    .context(format!("parsing file: {path:?}"))
}

/// Parses csv with a header row. Only `address_column` and `origin_key_column`
/// are used, other columns are ignored.
pub fn parse_contracts(
    content: &[u8],
    address_column: &str,
    origin_key_column: &str,
) -> anyhow::Result<Vec<ContractRecord>> {
    let mut reader = csv::Reader::from_reader(content);
    let headers = reader.headers().context("reading csv header")?.clone();
    let column_index = |column: &str| {
        headers
            .iter()
            .position(|header| header.trim() == column)
            .ok_or_else(|| anyhow::anyhow!("column `{column}` is missing in the header"))
    };
    let address_index = column_index(address_column)?;
    let origin_key_index = column_index(origin_key_column)?;

    reader
        .records()
        .enumerate()
        .map(|(index, row)| {
            // header is the first line
            let line = index + 2;
            let row = row.context(format!("reading line {line}"))?;
            let address = row
                .get(address_index)
                .map(str::trim)
                .filter(|address| !address.is_empty())
                .ok_or_else(|| anyhow::anyhow!("line {line}: `{address_column}` is empty"))?;
            let origin_key = row.get(origin_key_index).unwrap_or_default().trim();
            Ok(ContractRecord::new(address, origin_key))
        })
        .collect()
}
