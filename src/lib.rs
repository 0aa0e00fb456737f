mod aggregator;
mod cli;
mod dispatcher;
mod mapper;
mod registry;
mod settings;
mod types;

pub mod dataset;
pub mod explorer;
pub mod output;

pub use aggregator::Aggregator;
pub use cli::Args;
pub use dispatcher::{Dispatcher, EnrichError};
pub use mapper::apply as apply_response;
pub use registry::{ChainEndpoint, ChainRegistry, UnknownOrigin};
pub use settings::{
    DispatcherSettings, ExplorerSettings, InputSettings, OutputSettings, Settings,
};
pub use types::{normalize_address, ContractRecord, RunStats};
