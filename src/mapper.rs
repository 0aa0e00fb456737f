use crate::{explorer::ExplorerResponse, registry::ChainRegistry, types::ContractRecord};

/// Name fragments which mark a contract as a proxy when the explorer
/// does not report a proxy address itself.
const PROXY_NAME_MARKERS: [&str; 2] = ["proxy", "erc1967"];

/// Applies the explorer response to the record. Never fails: absent or `null`
/// fields of the response result in default values.
pub fn apply(
    mut record: ContractRecord,
    response: &ExplorerResponse,
    registry: &ChainRegistry,
) -> ContractRecord {
    record.name = response.name().to_string();
    record.verified_status = response.is_verified();
    record.source_repo_url = response.sourcify_repo_url().to_string();

    // The api does not report implementation address separately
    let proxy_address = response.minimal_proxy_address_hash();
    record.proxy_address = proxy_address.to_string();
    record.implementation_address = proxy_address.to_string();
    record.is_proxy_contract = !proxy_address.is_empty() || has_proxy_name(&record.name);

    if let Some(chain_id) = registry.chain_id(&record.origin_key) {
        record.chain_id = chain_id.to_string();
    }

    let verified_at = response.verified_at();
    if !verified_at.is_empty() {
        record.deployment_date = verified_at.to_string();
    }

    record
}

fn has_proxy_name(name: &str) -> bool {
    let name = name.to_lowercase();
    PROXY_NAME_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}
