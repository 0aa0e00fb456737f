mod client;
mod types;

pub use client::{ExplorerApi, ExplorerClient, FetchError, TransientError};
pub use types::ExplorerResponse;
