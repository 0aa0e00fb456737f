use super::ExplorerResponse;
use crate::settings::ExplorerSettings;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::{num::NonZeroUsize, time::Duration};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("contract not found")]
    NotFound,
    #[error("failed after {attempts} attempts: {last_error}")]
    ExhaustedRetries {
        attempts: usize,
        last_error: TransientError,
    },
    #[error("invalid request url {url}: {error}")]
    InvalidUrl {
        url: String,
        error: url::ParseError,
    },
}

/// Failure of a single attempt which is worth retrying.
#[derive(Error, Debug)]
pub enum TransientError {
    #[error("unexpected status code: {0}")]
    UnexpectedStatusCode(StatusCode),
    #[error("error occurred while sending request: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("deserializing response failed: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait ExplorerApi: Send + Sync {
    /// Retrieves smart-contract details from `{api_url}{address}`.
    async fn fetch(&self, api_url: &str, address: &str) -> Result<ExplorerResponse, FetchError>;
}

#[derive(Clone)]
pub struct ExplorerClient {
    http_client: reqwest::Client,
    attempts: NonZeroUsize,
    retry_delay: Duration,
}

impl ExplorerClient {
    pub fn new(settings: &ExplorerSettings) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout))
            .build()?;
        Ok(Self {
            http_client,
            attempts: settings.attempts,
            retry_delay: Duration::from_millis(settings.retry_delay_ms),
        })
    }

    /// Single request. `Ok(None)` means the explorer does not know the contract.
    async fn try_fetch(&self, url: Url) -> Result<Option<ExplorerResponse>, TransientError> {
        let response = self.http_client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                Ok(Some(serde_json::from_str(&body)?))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status_code => Err(TransientError::UnexpectedStatusCode(status_code)),
        }
    }
}

#[async_trait]
impl ExplorerApi for ExplorerClient {
    async fn fetch(&self, api_url: &str, address: &str) -> Result<ExplorerResponse, FetchError> {
        let url = request_url(api_url, address)?;

        let attempts = self.attempts.get();
        let mut attempt = 1;
        loop {
            match self.try_fetch(url.clone()).await {
                Ok(Some(response)) => return Ok(response),
                Ok(None) => return Err(FetchError::NotFound),
                Err(last_error) if attempt >= attempts => {
                    return Err(FetchError::ExhaustedRetries {
                        attempts,
                        last_error,
                    })
                }
                Err(err) => {
                    log::debug!("attempt {attempt}/{attempts} for {url} failed: {err}");
                    tokio::time::sleep(self.retry_delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

fn request_url(api_url: &str, address: &str) -> Result<Url, FetchError> {
    let url = format!("{api_url}{address}");
    Url::parse(&url).map_err(|error| FetchError::InvalidUrl { url, error })
}
