use crate::types::{ContractRecord, RunStats};
use parking_lot::Mutex;
use std::time::Instant;

/// How often the progress is reported on the `info` level.
const PROGRESS_LOG_INTERVAL: usize = 100;

/// Run-level counters. Can be shared between concurrently completing tasks.
pub struct Aggregator {
    started_at: Instant,
    stats: Mutex<RunStats>,
}

impl Aggregator {
    pub fn new(total_contracts: usize) -> Self {
        Self {
            started_at: Instant::now(),
            stats: Mutex::new(RunStats {
                total_contracts,
                ..Default::default()
            }),
        }
    }

    pub fn observe(&self, record: &ContractRecord) {
        let (processed, total) = {
            let mut stats = self.stats.lock();
            stats.processed_count += 1;
            if !record.name.is_empty() {
                stats.contracts_with_name += 1;
            }
            if record.is_proxy_contract {
                stats.proxy_contracts += 1;
            }
            stats.elapsed = self.started_at.elapsed();
            (stats.processed_count, stats.total_contracts)
        };

        if processed % PROGRESS_LOG_INTERVAL == 0 || processed == total {
            log::info!("processed {processed}/{total} contracts");
        } else {
            log::debug!("processed {processed}/{total} contracts");
        }
    }

    #[cfg(test)]
    fn snapshot(&self) -> RunStats {
        self.stats.lock().clone()
    }

    /// Final statistics with the elapsed time taken at the moment of the call.
    pub fn finish(self) -> RunStats {
        let mut stats = self.stats.into_inner();
        stats.elapsed = self.started_at.elapsed();
        stats
    }
}
