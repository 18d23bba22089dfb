// src/services/title_fetcher.rs
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT},
    redirect::Policy,
    Client, ClientBuilder, StatusCode,
};
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const MAX_REDIRECTS: usize = 30;

#[derive(Debug, Error)]
pub enum TitleFetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    ServerError(StatusCode),
}

/// Result of probing a domain's homepage.
///
/// `working_url` is the candidate that answered, even when no usable title
/// was found on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub working_url: Option<String>,
    pub title: Option<String>,
}

#[async_trait]
pub trait TitleSource: Send + Sync {
    async fn fetch_title(&self, domain: &str) -> FetchOutcome;
}

/// Homepage URLs tried for a domain, in priority order
pub fn candidate_urls(domain: &str) -> Vec<String> {
    let builders: [fn(&str) -> String; 2] = [
        |d| format!("https://{}", d),
        |d| format!("https://www.{}", d),
    ];
    builders.iter().map(|build| build(domain)).collect()
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64)"),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}

/// Builds the shared client used for homepage probes.
///
/// Certificate and hostname verification are turned off: plenty of
/// institutional sites serve expired or mismatched certificates, and the
/// probe only reads a public `<title>`. Nothing fetched here is trusted
/// beyond fuzzy name matching.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    warn!("TLS certificate validation is disabled for homepage title fetches");
    client_builder(timeout).build()
}

fn client_builder(timeout: Duration) -> ClientBuilder {
    Client::builder()
        .timeout(timeout)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .default_headers(browser_headers())
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
}

/// Returns the trimmed text of the document's first `<title>`, if non-empty
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;

    let title = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>();
    let title = title.trim();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct TitleFetcher {
    client: Client,
}

impl TitleFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_body(&self, url: &str) -> Result<String, TitleFetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_server_error() {
            return Err(TitleFetchError::ServerError(status));
        }

        debug!(url = %url, status = %status, "Candidate responded");
        Ok(response.text().await?)
    }

    /// Tries each candidate in order; the first one answering below 500 wins
    pub async fn fetch_from_candidates(&self, candidates: &[String]) -> FetchOutcome {
        for url in candidates {
            match self.fetch_body(url).await {
                Ok(body) => {
                    let title = extract_title(&body);
                    debug!(url = %url, found_title = title.is_some(), "Parsed homepage");
                    return FetchOutcome {
                        working_url: Some(url.clone()),
                        title,
                    };
                }
                Err(e) => {
                    debug!(url = %url, error = %e, "Candidate failed, trying next");
                }
            }
        }

        FetchOutcome::default()
    }
}

#[async_trait]
impl TitleSource for TitleFetcher {
    async fn fetch_title(&self, domain: &str) -> FetchOutcome {
        self.fetch_from_candidates(&candidate_urls(domain)).await
    }
}
