use crate::{SurveyError, SurveyResult};
use reqwest::{Client, StatusCode};
use std::future::Future;
use tracing::{debug, info, warn};

/// Source of raw CSV text for a URL.
///
/// One call is one network request; implementations do not cache.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = SurveyResult<String>>;
}

/// One `GET` per call over a shared `reqwest::Client`. No retries.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fetcher for HttpFetcher {
    /// Returns the body on `200 OK`; any other status is `SurveyError::HttpStatus`.
    async fn fetch(&self, url: &str) -> SurveyResult<String> {
        info!(%url, "fetching survey sheet");
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), %url, "survey fetch failed");
            return Err(SurveyError::HttpStatus(status.as_u16()));
        }

        let body = resp.text().await?;
        debug!(bytes = body.len(), "survey body received");
        Ok(body)
    }
}
