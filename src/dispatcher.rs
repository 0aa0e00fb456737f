use crate::{
    aggregator::Aggregator,
    explorer::{ExplorerApi, FetchError},
    mapper,
    registry::{ChainRegistry, UnknownOrigin},
    types::{ContractRecord, RunStats},
};
use futures::{stream, StreamExt};
use std::num::NonZeroUsize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error(transparent)]
    UnknownOrigin(#[from] UnknownOrigin),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub struct Dispatcher<C> {
    client: C,
    registry: ChainRegistry,
    concurrency: NonZeroUsize,
}

impl<C: ExplorerApi> Dispatcher<C> {
    pub fn new(client: C, registry: ChainRegistry, concurrency: NonZeroUsize) -> Self {
        Self {
            client,
            registry,
            concurrency,
        }
    }

    /// Enriches the first `max_to_process` records (all of them if `0`).
    ///
    /// Every submitted record is returned exactly once: enriched on success,
    /// untouched if it could not be enriched. Results go in completion order.
    pub async fn run(
        &self,
        mut records: Vec<ContractRecord>,
        max_to_process: usize,
    ) -> (Vec<ContractRecord>, RunStats) {
        if max_to_process > 0 {
            records.truncate(max_to_process);
        }

        let aggregator = Aggregator::new(records.len());
        log::info!(
            "enriching contracts started; total={}, concurrency={}",
            records.len(),
            self.concurrency
        );

        let results = stream::iter(records)
            .map(|record| self.process(record))
            .buffer_unordered(self.concurrency.get())
            .inspect(|record| aggregator.observe(record))
            .collect::<Vec<_>>()
            .await;

        let stats = aggregator.finish();
        log::info!(
            "enriching contracts finished; processed={}, with_name={}, proxies={}, elapsed={:?}",
            stats.processed_count,
            stats.contracts_with_name,
            stats.proxy_contracts,
            stats.elapsed
        );

        (results, stats)
    }

    async fn process(&self, record: ContractRecord) -> ContractRecord {
        match self.enrich(&record).await {
            Ok(enriched) => enriched,
            Err(err) => {
                let reason = match &err {
                    EnrichError::UnknownOrigin(_) => "unknown origin key",
                    EnrichError::Fetch(FetchError::NotFound) => "contract not found on explorer",
                    EnrichError::Fetch(_) => "error processing contract",
                };
                log::warn!(
                    "{reason}; contract={}, origin_key={}, error={err}",
                    record.address,
                    record.origin_key
                );
                record
            }
        }
    }

    async fn enrich(&self, record: &ContractRecord) -> Result<ContractRecord, EnrichError> {
        let endpoint = self.registry.resolve(&record.origin_key)?;
        let response = self
            .client
            .fetch(&endpoint.api_url, &record.address)
            .await?;
        Ok(mapper::apply(record.clone(), &response, &self.registry))
    }
}
