use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;
use url::Url;

use crate::config;

/// A fetched page. The body is always decoded as UTF-8, lossily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub text: String,
}

impl Page {
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Page { status, text: text.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can go wrong while retrieving a single page.
///
/// These are recoverable: the monitor skips the region or the candidate and
/// moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme in '{url}'")]
    UnsupportedScheme { url: String },
    #[error("timed out fetching {url}")]
    Timeout { url: String },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    fn from_reqwest(url: &Url, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout { url: url.to_string() }
        } else {
            FetchError::Request { url: url.to_string(), source: e }
        }
    }
}

/// Page-fetcher capability used by the monitor.
pub trait PageFetcher {
    fn get(&self, url: &Url) -> Result<Page, FetchError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn get(&self, url: &Url) -> Result<Page, FetchError> {
        (**self).get(url)
    }
}

/// Blocking HTTP fetcher with a fixed timeout and user agent.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(config::USER_AGENT));

        let client = Client::builder()
            .timeout(config::REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn get(&self, url: &Url) -> Result<Page, FetchError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = resp.status();
        // Read as UTF-8 whatever charset the server declares.
        let bytes = resp.bytes().map_err(|e| FetchError::from_reqwest(url, e))?;
        Ok(Page {
            status: status.as_u16(),
            text: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
